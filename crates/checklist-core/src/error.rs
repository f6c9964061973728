//! Error types for the checklist domain
//!
//! Provides the error taxonomy the HTTP layer maps onto status codes:
//! - Payload validation failures (400)
//! - Missing tasks and profiles (404)
//! - Store adapter failures (500)

use checklist_store::StoreError;

/// Payload failed a schema check
///
/// Only the first violation found is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent
    #[error("{field} field is required")]
    Required {
        /// Field name
        field: String,
    },

    /// A field is present with the wrong JSON type
    #[error("{field} field is not of type {expected}")]
    WrongType {
        /// Field name
        field: String,
        /// Human-readable kind the schema declares
        expected: String,
    },

    /// Payload is not a JSON object
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// Payload passed the schema but could not be read into the domain type
    #[error("malformed payload: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// Create required-field error
    pub fn required(field: impl Into<String>) -> Self {
        Self::Required {
            field: field.into(),
        }
    }

    /// Create wrong-type error
    pub fn wrong_type(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::WrongType {
            field: field.into(),
            expected: expected.into(),
        }
    }
}

/// Main checklist error type
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Payload rejected by a validator
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced task or profile is absent
    #[error("{0}")]
    DoesNotExist(String),

    /// List counter holds a value that cannot be a task id
    #[error("counter at '{key}' produced invalid id {value}")]
    CorruptCounter {
        /// Counter key
        key: String,
        /// Value returned by the increment
        value: i64,
    },

    /// Store adapter failure
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    /// Missing task in a list
    pub fn task_not_found(id: impl std::fmt::Display) -> Self {
        Self::DoesNotExist(format!("Task with id {id} does not exist."))
    }

    /// Missing profile
    pub fn profile_not_found(name: &str) -> Self {
        Self::DoesNotExist(format!("Profile '{name}' does not exist."))
    }

    /// Check if error is a missing entity
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::DoesNotExist(_))
    }

    /// Check if error is a rejected payload
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result alias for domain operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::required("name").to_string(),
            "name field is required"
        );
        assert_eq!(
            ValidationError::wrong_type("done", "boolean").to_string(),
            "done field is not of type boolean"
        );
    }

    #[test]
    fn not_found_messages() {
        let err = CoreError::task_not_found(7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Task with id 7 does not exist.");

        let err = CoreError::profile_not_found("ann");
        assert_eq!(err.to_string(), "Profile 'ann' does not exist.");
    }

    #[test]
    fn validation_converts_transparently() {
        let err: CoreError = ValidationError::required("lists").into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "lists field is required");
    }
}

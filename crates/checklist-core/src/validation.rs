//! Payload validation against declared field schemas
//!
//! Each entity declares its schema as data (a list of [`FieldSpec`]) and a
//! single routine checks JSON payloads against it:
//! - Present fields must have the declared kind
//! - Absent fields fail only if the caller lists them as required
//! - Absent optional fields are skipped; defaults belong to the managers

use crate::error::ValidationError;
use serde_json::Value;
use std::fmt;

/// JSON kind a field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON string
    Text,
    /// JSON string with at least one character
    NonEmptyText,
    /// JSON boolean
    Boolean,
    /// JSON array of strings
    TextList,
}

impl FieldKind {
    /// Check whether `value` has this kind
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::Text => value.is_string(),
            Self::NonEmptyText => value.as_str().is_some_and(|text| !text.is_empty()),
            Self::Boolean => value.is_boolean(),
            Self::TextList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::NonEmptyText => "non-empty text",
            Self::Boolean => "boolean",
            Self::TextList => "list of text",
        };
        f.write_str(name)
    }
}

/// One declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name in the payload
    pub name: &'static str,
    /// Expected kind
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Declare a field
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Task payload schema
pub const TASK_SCHEMA: &[FieldSpec] = &[
    FieldSpec::new("name", FieldKind::NonEmptyText),
    FieldSpec::new("done", FieldKind::Boolean),
];

/// Profile payload schema
pub const PROFILE_SCHEMA: &[FieldSpec] = &[FieldSpec::new("lists", FieldKind::TextList)];

/// Schema-driven payload validator
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    fields: &'static [FieldSpec],
}

impl Validator {
    /// Validator over an arbitrary schema
    #[inline]
    #[must_use]
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    /// Validator for task payloads
    #[inline]
    #[must_use]
    pub const fn task() -> Self {
        Self::new(TASK_SCHEMA)
    }

    /// Validator for profile payloads
    #[inline]
    #[must_use]
    pub const fn profile() -> Self {
        Self::new(PROFILE_SCHEMA)
    }

    /// Declared fields
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Check `payload` against the schema
    ///
    /// Fields are visited in declaration order and the first violation is
    /// returned. Fields in `required` that the schema does not declare are
    /// ignored.
    ///
    /// # Errors
    /// - `ValidationError::NotAnObject` if `payload` is not a JSON object
    /// - `ValidationError::WrongType` for a present field of the wrong kind
    /// - `ValidationError::Required` for an absent required field
    pub fn validate(&self, payload: &Value, required: &[&str]) -> Result<(), ValidationError> {
        let object = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        for spec in self.fields {
            match object.get(spec.name) {
                Some(value) if !spec.kind.matches(value) => {
                    return Err(ValidationError::wrong_type(spec.name, spec.kind.to_string()));
                }
                Some(_) => {}
                None if required.contains(&spec.name) => {
                    return Err(ValidationError::required(spec.name));
                }
                None => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payload_missing_required_name() {
        let err = Validator::task().validate(&json!({}), &["name"]).unwrap_err();
        assert_eq!(err, ValidationError::required("name"));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn wrong_done_type_is_reported() {
        let err = Validator::task()
            .validate(&json!({"name": "x", "done": "not-a-bool"}), &[])
            .unwrap_err();
        assert_eq!(err, ValidationError::wrong_type("done", "boolean"));
    }

    #[test]
    fn optional_fields_may_be_absent() {
        assert!(Validator::task().validate(&json!({}), &[]).is_ok());
        assert!(Validator::task()
            .validate(&json!({"name": "x"}), &["name"])
            .is_ok());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        assert!(Validator::task()
            .validate(&json!({"name": "x", "colour": 3}), &["name"])
            .is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let err = Validator::task()
            .validate(&json!({"name": 1, "done": "no"}), &[])
            .unwrap_err();
        assert_eq!(err, ValidationError::wrong_type("name", "non-empty text"));
    }

    #[test]
    fn empty_task_name_is_rejected() {
        let err = Validator::task()
            .validate(&json!({"name": ""}), &["name"])
            .unwrap_err();
        assert_eq!(err, ValidationError::wrong_type("name", "non-empty text"));
        assert!(Validator::task().validate(&json!({"name": " "}), &[]).is_ok());
    }

    #[test]
    fn profile_lists_must_be_strings() {
        let validator = Validator::profile();

        assert!(validator
            .validate(&json!({"lists": ["a", "b"]}), &["lists"])
            .is_ok());
        assert!(validator.validate(&json!({"lists": []}), &["lists"]).is_ok());
        assert_eq!(
            validator
                .validate(&json!({"lists": ["a", 2]}), &["lists"])
                .unwrap_err(),
            ValidationError::wrong_type("lists", "list of text")
        );
        assert_eq!(
            validator.validate(&json!({}), &["lists"]).unwrap_err(),
            ValidationError::required("lists")
        );
    }

    #[test]
    fn schemas_are_declared_as_data() {
        let names: Vec<_> = Validator::task().fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "done"]);
        assert_eq!(Validator::profile().fields(), PROFILE_SCHEMA);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert_eq!(
            Validator::task().validate(&json!([1, 2]), &[]).unwrap_err(),
            ValidationError::NotAnObject
        );
        assert_eq!(
            Validator::task().validate(&Value::Null, &[]).unwrap_err(),
            ValidationError::NotAnObject
        );
    }
}

//! Error types for store backends

/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore) backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Key holds a value of a different kind than the operation expects
    #[error("wrong kind of value at '{key}': expected {expected}, found {found}")]
    WrongType {
        /// Offending key
        key: String,
        /// Kind the operation needed
        expected: ValueKind,
        /// Kind actually stored
        found: ValueKind,
    },

    /// Counter key holds a string that is not an integer
    #[error("value at '{0}' is not an integer")]
    NotAnInteger(String),

    /// Counter would overflow
    #[error("increment would overflow counter at '{0}'")]
    Overflow(String),

    /// Backend is unreachable or failed mid-command
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Create wrong-type error for key
    pub fn wrong_type(key: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        Self::WrongType {
            key: key.into(),
            expected,
            found,
        }
    }
}

/// Kind of value stored under a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Plain string (also used for counters)
    String,
    /// Field → value map
    Hash,
    /// Unordered set of members
    Set,
    /// Ordered list
    List,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Hash => "hash",
            Self::Set => "set",
            Self::List => "list",
        };
        f.write_str(name)
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

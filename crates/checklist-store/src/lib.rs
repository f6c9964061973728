//! Checklist Store
//!
//! Key-value storage capability used by the checklist managers.
//!
//! # Overview
//!
//! The store layer provides:
//! - **KeyValueStore**: async trait over strings, counters, hashes, sets and lists
//! - **MemoryStore**: sharded in-process backend
//! - **StoreError**: backend failures (wrong kind of value, bad counter, outage)
//!
//! # Example
//!
//! ```rust
//! use checklist_store::{KeyValueStore, MemoryStore};
//!
//! # async fn example() -> Result<(), checklist_store::StoreError> {
//! let store = MemoryStore::new();
//!
//! assert_eq!(store.increment("groceries:counter").await?, 1);
//! store.set_add("groceries:ids", &["1".to_string()]).await?;
//! assert!(store.exists("groceries:ids").await?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod memory;
pub mod store;

// Re-exports
pub use error::{StoreError, StoreResult, ValueKind};
pub use memory::MemoryStore;
pub use store::{FieldMap, KeyValueStore};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

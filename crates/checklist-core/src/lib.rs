//! Checklist Core
//!
//! Maps checklist and profile operations onto key-value store primitives.
//!
//! # Overview
//!
//! The core provides:
//! - **IndexManager**: per-list set of valid task ids
//! - **Validator**: schema-driven JSON payload checks
//! - **TaskManager**: task CRUD with monotonic id allocation
//! - **ProfileManager**: ordered string lists per profile
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use checklist_core::{IndexManager, NewTask, TaskManager, TaskPatch};
//! use checklist_store::MemoryStore;
//!
//! # async fn example() -> Result<(), checklist_core::CoreError> {
//! let store = Arc::new(MemoryStore::new());
//! let tasks = TaskManager::new(Arc::clone(&store), IndexManager::new(store));
//!
//! let id = tasks.create("groceries", NewTask::new("milk")).await?;
//! tasks.exists("groceries", id).await?;
//! let task = tasks.update("groceries", id, &TaskPatch::done(true)).await?;
//! assert_eq!(task.done, Some(true));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod index;
pub mod keys;
pub mod profiles;
pub mod task;
pub mod tasks;
pub mod validation;

// Re-exports
pub use error::{CoreError, CoreResult, ValidationError};
pub use index::IndexManager;
pub use profiles::{Profile, ProfileManager};
pub use task::{decode, encode, NewTask, Task, TaskId, TaskPatch};
pub use tasks::TaskManager;
pub use validation::{FieldKind, FieldSpec, Validator, PROFILE_SCHEMA, TASK_SCHEMA};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for checklist operations
    pub use crate::{
        CoreError, CoreResult, IndexManager, NewTask, Profile, ProfileManager, Task, TaskId,
        TaskManager, TaskPatch, ValidationError, Validator,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

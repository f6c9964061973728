//! Checklist Server
//!
//! Thin HTTP layer over the checklist managers.
//!
//! # Overview
//!
//! The server provides:
//! - **router**: axum routes for checklists and profiles
//! - **Basic auth**: one configured credential pair guards `/api`
//! - **ApiError**: domain errors mapped to status codes and `{"error": ...}` bodies
//! - **ServerConfig**: flags and environment configuration
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use checklist_server::{router, AppState, Credentials};
//! use checklist_store::MemoryStore;
//!
//! let state = AppState::new(Arc::new(MemoryStore::new()));
//! let app = router(state, Credentials::new("test", "pass"));
//! # let _ = app;
//! ```

#![warn(missing_docs)]

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// Re-exports
pub use config::{ConfigError, Credentials, ServerConfig, Settings};
pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

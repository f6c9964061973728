//! Testing utilities for the checklist workspace
//!
//! Shared fixtures: a fresh store, wired managers, and JSON payload builders.

#![allow(missing_docs)]

use checklist_core::{IndexManager, ProfileManager, TaskManager};
use checklist_store::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;

/// Managers sharing one in-memory store
#[derive(Debug, Clone)]
pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub tasks: TaskManager<MemoryStore>,
    pub profiles: ProfileManager<MemoryStore>,
}

pub fn fresh_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub fn setup_managers() -> Fixture {
    let store = fresh_store();
    let index = IndexManager::new(Arc::clone(&store));
    Fixture {
        tasks: TaskManager::new(Arc::clone(&store), index),
        profiles: ProfileManager::new(Arc::clone(&store)),
        store,
    }
}

pub fn task_payload(name: &str, done: Option<bool>) -> Value {
    match done {
        Some(done) => json!({ "name": name, "done": done }),
        None => json!({ "name": name }),
    }
}

pub fn profile_payload(lists: &[&str]) -> Value {
    json!({ "lists": lists })
}

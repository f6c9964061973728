//! Shared handler state

use checklist_core::{IndexManager, ProfileManager, TaskManager};
use checklist_store::KeyValueStore;
use std::sync::Arc;

/// Managers shared by every handler
#[derive(Debug)]
pub struct AppState<S> {
    /// Task operations
    pub tasks: TaskManager<S>,
    /// Profile operations
    pub profiles: ProfileManager<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            profiles: self.profiles.clone(),
        }
    }
}

impl<S: KeyValueStore> AppState<S> {
    /// Wire managers over one store
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        let index = IndexManager::new(Arc::clone(&store));
        Self {
            tasks: TaskManager::new(Arc::clone(&store), index),
            profiles: ProfileManager::new(store),
        }
    }
}

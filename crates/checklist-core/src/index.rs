//! Per-list index of task identifiers
//!
//! Provides [`IndexManager`], a thin adapter over the store's set primitive.
//! An id is in a list's index exactly when its task hash exists; keeping that
//! true is the caller's job.

use crate::error::CoreResult;
use crate::keys::index_key;
use crate::task::TaskId;
use checklist_store::KeyValueStore;
use std::collections::HashSet;
use std::sync::Arc;

/// Index of valid ids per list name
#[derive(Debug)]
pub struct IndexManager<S> {
    store: Arc<S>,
}

impl<S> Clone for IndexManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> IndexManager<S> {
    /// Create index over a shared store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All ids indexed for `list_name`; empty if none
    ///
    /// Members that are not valid ids are skipped.
    pub async fn get(&self, list_name: &str) -> CoreResult<HashSet<TaskId>> {
        let members = self.store.set_members(&index_key(list_name)).await?;

        Ok(members
            .into_iter()
            .filter_map(|member| match member.parse() {
                Ok(id) => Some(id),
                Err(_) => {
                    tracing::warn!(list_name, %member, "skipping non-numeric index member");
                    None
                }
            })
            .collect())
    }

    /// Add `id` to the list's index; no-op if already present
    pub async fn add(&self, list_name: &str, id: TaskId) -> CoreResult<()> {
        self.store
            .set_add(&index_key(list_name), &[id.to_string()])
            .await?;
        Ok(())
    }

    /// Remove `id` from the list's index; no-op if absent
    pub async fn remove(&self, list_name: &str, id: TaskId) -> CoreResult<()> {
        self.store
            .set_remove(&index_key(list_name), &[id.to_string()])
            .await?;
        Ok(())
    }
}

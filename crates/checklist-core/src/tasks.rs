//! Task CRUD within named lists
//!
//! Provides [`TaskManager`], which maps task operations onto store keys:
//! - Ids come from the list counter and are never reused
//! - Each task is a hash; its id is registered in the list index
//! - Updates merge the supplied fields over the stored ones
//!
//! Create and delete are several store calls each, with no transaction around
//! them. A crash in between can leave an allocated id without a hash or a hash
//! without an index entry.

use crate::error::{CoreError, CoreResult};
use crate::index::IndexManager;
use crate::keys::{counter_key, task_key};
use crate::task::{decode, encode, NewTask, Task, TaskId, TaskPatch};
use checklist_store::KeyValueStore;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Task operations scoped by list name
#[derive(Debug)]
pub struct TaskManager<S> {
    store: Arc<S>,
    index: IndexManager<S>,
}

impl<S> Clone for TaskManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            index: self.index.clone(),
        }
    }
}

impl<S: KeyValueStore> TaskManager<S> {
    /// Create manager over a shared store and its list index
    #[inline]
    #[must_use]
    pub fn new(store: Arc<S>, index: IndexManager<S>) -> Self {
        Self { store, index }
    }

    /// Index used for list membership
    #[inline]
    #[must_use]
    pub fn index(&self) -> &IndexManager<S> {
        &self.index
    }

    /// Every indexed task of `list_name`, keyed by id
    ///
    /// An indexed id whose hash has vanished shows up as an empty task.
    pub async fn all(&self, list_name: &str) -> CoreResult<BTreeMap<TaskId, Task>> {
        let mut tasks = BTreeMap::new();
        for id in self.index.get(list_name).await? {
            let task = self.get(list_name, id).await?;
            tasks.insert(id, task);
        }
        Ok(tasks)
    }

    /// Store a new task and return its id
    ///
    /// The first task of a fresh list gets id 1. Payloads are expected to be
    /// validated already.
    pub async fn create(&self, list_name: &str, new_task: NewTask) -> CoreResult<TaskId> {
        let id = self.next_id(list_name).await?;
        let task = Task::from(new_task);

        self.store.hash_set(&task_key(list_name, id), encode(&task)).await?;
        self.index.add(list_name, id).await?;

        tracing::debug!(list_name, %id, "task created");
        Ok(id)
    }

    /// Read one task
    ///
    /// A stored hash without `done` yields a task without `done`.
    pub async fn get(&self, list_name: &str, id: TaskId) -> CoreResult<Task> {
        let fields = self.store.hash_get_all(&task_key(list_name, id)).await?;
        Ok(decode(&fields))
    }

    /// Merge `patch` over the stored task and persist the result
    ///
    /// Fields missing from `patch` keep their stored values; patch fields the
    /// stored hash lacks are dropped. A task with no stored hash is left
    /// untouched and comes back empty. Not guarded against concurrent updates
    /// of the same task.
    pub async fn update(&self, list_name: &str, id: TaskId, patch: &TaskPatch) -> CoreResult<Task> {
        let updated = self.get(list_name, id).await?.merged(patch);
        if updated.is_empty() {
            return Ok(updated);
        }

        self.store
            .hash_set(&task_key(list_name, id), encode(&updated))
            .await?;

        tracing::debug!(list_name, %id, "task updated");
        Ok(updated)
    }

    /// Remove a task and its index entry
    ///
    /// Deleting a missing id is not an error. The list counter is left alone,
    /// so the id is never handed out again.
    pub async fn delete(&self, list_name: &str, id: TaskId) -> CoreResult<()> {
        self.store.delete(&task_key(list_name, id)).await?;
        self.index.remove(list_name, id).await?;

        tracing::debug!(list_name, %id, "task deleted");
        Ok(())
    }

    /// Guard that the task exists
    ///
    /// Returns `Ok(true)` or fails; it never reports `false`.
    ///
    /// # Errors
    /// `CoreError::DoesNotExist` if no hash is stored for the task
    pub async fn exists(&self, list_name: &str, id: TaskId) -> CoreResult<bool> {
        if self.store.exists(&task_key(list_name, id)).await? {
            Ok(true)
        } else {
            Err(CoreError::task_not_found(id))
        }
    }

    async fn next_id(&self, list_name: &str) -> CoreResult<TaskId> {
        let key = counter_key(list_name);
        let value = self.store.increment(&key).await?;

        u64::try_from(value)
            .ok()
            .filter(|raw| *raw > 0)
            .map(TaskId::new)
            .ok_or(CoreError::CorruptCounter { key, value })
    }
}

//! Profiles: named ordered lists of strings
//!
//! A profile lives in one store list under `profile:<name>`. The store's push
//! prepends, so elements are pushed in reverse to read back in caller order.

use crate::error::{CoreError, CoreResult};
use crate::keys::profile_key;
use checklist_store::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Profile payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Ordered entries, duplicates allowed
    pub lists: Vec<String>,
}

impl Profile {
    /// Create profile from entries
    #[must_use]
    pub fn new<I, T>(lists: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            lists: lists.into_iter().map(Into::into).collect(),
        }
    }
}

/// Profile operations
#[derive(Debug)]
pub struct ProfileManager<S> {
    store: Arc<S>,
}

impl<S> Clone for ProfileManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> ProfileManager<S> {
    /// Create manager over a shared store
    #[inline]
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Push the profile's entries so that [`get`](Self::get) returns them in order
    ///
    /// On an existing profile the new entries land ahead of the old ones.
    pub async fn create(&self, profile_name: &str, profile: &Profile) -> CoreResult<()> {
        let reversed: Vec<String> = profile.lists.iter().rev().cloned().collect();
        self.store
            .list_push(&profile_key(profile_name), &reversed)
            .await?;

        tracing::debug!(profile_name, entries = profile.lists.len(), "profile written");
        Ok(())
    }

    /// Entries in stored order; empty if the profile is absent
    pub async fn get(&self, profile_name: &str) -> CoreResult<Vec<String>> {
        Ok(self
            .store
            .list_range(&profile_key(profile_name), 0, -1)
            .await?)
    }

    /// Replace the profile's entries wholesale
    ///
    /// Implemented as delete then create; concurrent updates can interleave.
    pub async fn update(&self, profile_name: &str, profile: &Profile) -> CoreResult<()> {
        self.delete(profile_name).await?;
        self.create(profile_name, profile).await
    }

    /// Remove the profile
    pub async fn delete(&self, profile_name: &str) -> CoreResult<()> {
        self.store.delete(&profile_key(profile_name)).await?;
        tracing::debug!(profile_name, "profile deleted");
        Ok(())
    }

    /// Check whether the profile exists and holds entries
    ///
    /// Unlike [`TaskManager::exists`](crate::TaskManager::exists) this reports
    /// absence as `false`.
    pub async fn exists(&self, profile_name: &str) -> CoreResult<bool> {
        Ok(self.store.exists(&profile_key(profile_name)).await?)
    }

    /// Fail unless the profile exists
    ///
    /// # Errors
    /// `CoreError::DoesNotExist` if [`exists`](Self::exists) is false
    pub async fn ensure_exists(&self, profile_name: &str) -> CoreResult<()> {
        if self.exists(profile_name).await? {
            Ok(())
        } else {
            Err(CoreError::profile_not_found(profile_name))
        }
    }
}

//! The key-value capability consumed by the managers
//!
//! Models the small subset of a Redis-like store that checklist storage needs:
//! - Strings and atomic counters
//! - Hashes (field → value maps)
//! - Sets of members
//! - Lists with head insertion

use crate::error::StoreResult;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

/// Field map stored in a hash
pub type FieldMap = HashMap<String, String>;

/// Key-value store with hash, set, list and counter primitives
///
/// Every method is a single round-trip and atomic with respect to its own key.
/// Nothing here spans keys; callers composing several calls get no
/// transactional guarantee.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Overwrite or create `fields` on the hash at `key`
    async fn hash_set(&self, key: &str, fields: FieldMap) -> StoreResult<()>;

    /// Read every field of the hash at `key`; empty if absent
    async fn hash_get_all(&self, key: &str) -> StoreResult<FieldMap>;

    /// Check whether `key` holds any value
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Remove `key`; returns whether something was removed
    async fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Atomically increment the counter at `key`
    ///
    /// A missing counter starts at 0, so the first call returns 1.
    async fn increment(&self, key: &str) -> StoreResult<i64>;

    /// Read the string at `key`
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Overwrite `key` with a string
    async fn set(&self, key: &str, value: String) -> StoreResult<()>;

    /// Add members to the set at `key`; returns how many were new
    async fn set_add(&self, key: &str, members: &[String]) -> StoreResult<usize>;

    /// Remove members from the set at `key`; returns how many were present
    async fn set_remove(&self, key: &str, members: &[String]) -> StoreResult<usize>;

    /// All members of the set at `key`; empty if absent
    async fn set_members(&self, key: &str) -> StoreResult<HashSet<String>>;

    /// Prepend `values` one at a time to the list at `key`
    ///
    /// Pushing `a, b, c` leaves the list as `c, b, a`. Returns the new length.
    async fn list_push(&self, key: &str, values: &[String]) -> StoreResult<usize>;

    /// Elements `start..=end` of the list at `key`
    ///
    /// Negative indexes count from the tail, so `(0, -1)` is the whole list.
    async fn list_range(&self, key: &str, start: i64, end: i64) -> StoreResult<Vec<String>>;
}

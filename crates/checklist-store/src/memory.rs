//! In-process store backend
//!
//! Provides [`MemoryStore`], a [`KeyValueStore`] over a sharded `DashMap`.
//! Each command locks only the shard holding its key, so commands on one key
//! are serialized while unrelated keys proceed in parallel.

use crate::error::{StoreError, StoreResult, ValueKind};
use crate::store::{FieldMap, KeyValueStore};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

/// Value stored under a single key
#[derive(Debug, Clone)]
enum Value {
    String(String),
    Hash(FieldMap),
    Set(HashSet<String>),
    List(VecDeque<String>),
}

impl Value {
    fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Hash(_) => ValueKind::Hash,
            Self::Set(_) => ValueKind::Set,
            Self::List(_) => ValueKind::List,
        }
    }

    fn is_empty_collection(&self) -> bool {
        match self {
            Self::String(_) => false,
            Self::Hash(h) => h.is_empty(),
            Self::Set(s) => s.is_empty(),
            Self::List(l) => l.is_empty(),
        }
    }
}

/// Shared in-memory key-value store
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, Value>>,
}

impl MemoryStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if store holds no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every key
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Remove `key` if its collection was emptied by the previous command
    fn drop_if_empty(&self, key: &str) {
        self.entries.remove_if(key, |_, v| v.is_empty_collection());
    }
}

/// Resolve an inclusive, possibly negative range against a list of `len`
///
/// Returns `None` when the range selects nothing.
pub(crate) fn resolve_range(len: usize, start: i64, end: i64) -> Option<(usize, usize)> {
    let len = i64::try_from(len).ok()?;
    if len == 0 {
        return None;
    }

    let start = if start < 0 { (len + start).max(0) } else { start };
    let end = if end < 0 { len + end } else { end.min(len - 1) };

    if start > end || start >= len || end < 0 {
        return None;
    }

    Some((usize::try_from(start).ok()?, usize::try_from(end).ok()?))
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn hash_set(&self, key: &str, fields: FieldMap) -> StoreResult<()> {
        if fields.is_empty() {
            return Ok(());
        }

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => match occupied.get_mut() {
                Value::Hash(hash) => {
                    hash.extend(fields);
                    Ok(())
                }
                other => Err(StoreError::wrong_type(key, ValueKind::Hash, other.kind())),
            },
            Entry::Vacant(vacant) => {
                vacant.insert(Value::Hash(fields));
                Ok(())
            }
        }
    }

    async fn hash_get_all(&self, key: &str) -> StoreResult<FieldMap> {
        match self.entries.get(key).as_deref() {
            None => Ok(FieldMap::new()),
            Some(Value::Hash(hash)) => Ok(hash.clone()),
            Some(other) => Err(StoreError::wrong_type(key, ValueKind::Hash, other.kind())),
        }
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        let removed = self.entries.remove(key).is_some();
        tracing::trace!(key, removed, "delete");
        Ok(removed)
    }

    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::String("0".to_string()));

        match &mut *entry {
            Value::String(current) => {
                let value: i64 = current
                    .parse()
                    .map_err(|_| StoreError::NotAnInteger(key.to_string()))?;
                let next = value
                    .checked_add(1)
                    .ok_or_else(|| StoreError::Overflow(key.to_string()))?;
                *current = next.to_string();
                tracing::trace!(key, next, "increment");
                Ok(next)
            }
            other => Err(StoreError::wrong_type(key, ValueKind::String, other.kind())),
        }
    }

    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match self.entries.get(key).as_deref() {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(StoreError::wrong_type(key, ValueKind::String, other.kind())),
        }
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        self.entries.insert(key.to_string(), Value::String(value));
        Ok(())
    }

    async fn set_add(&self, key: &str, members: &[String]) -> StoreResult<usize> {
        if members.is_empty() {
            return Ok(0);
        }

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => match occupied.get_mut() {
                Value::Set(set) => Ok(members
                    .iter()
                    .filter(|m| set.insert((*m).clone()))
                    .count()),
                other => Err(StoreError::wrong_type(key, ValueKind::Set, other.kind())),
            },
            Entry::Vacant(vacant) => {
                let set: HashSet<String> = members.iter().cloned().collect();
                let added = set.len();
                vacant.insert(Value::Set(set));
                Ok(added)
            }
        }
    }

    async fn set_remove(&self, key: &str, members: &[String]) -> StoreResult<usize> {
        let removed = match self.entries.get_mut(key).as_deref_mut() {
            None => return Ok(0),
            Some(Value::Set(set)) => members.iter().filter(|m| set.remove(*m)).count(),
            Some(other) => {
                return Err(StoreError::wrong_type(key, ValueKind::Set, other.kind()));
            }
        };

        self.drop_if_empty(key);
        Ok(removed)
    }

    async fn set_members(&self, key: &str) -> StoreResult<HashSet<String>> {
        match self.entries.get(key).as_deref() {
            None => Ok(HashSet::new()),
            Some(Value::Set(set)) => Ok(set.clone()),
            Some(other) => Err(StoreError::wrong_type(key, ValueKind::Set, other.kind())),
        }
    }

    async fn list_push(&self, key: &str, values: &[String]) -> StoreResult<usize> {
        if values.is_empty() {
            return match self.entries.get(key).as_deref() {
                None => Ok(0),
                Some(Value::List(list)) => Ok(list.len()),
                Some(other) => Err(StoreError::wrong_type(key, ValueKind::List, other.kind())),
            };
        }

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => match occupied.get_mut() {
                Value::List(list) => {
                    for value in values {
                        list.push_front(value.clone());
                    }
                    Ok(list.len())
                }
                other => Err(StoreError::wrong_type(key, ValueKind::List, other.kind())),
            },
            Entry::Vacant(vacant) => {
                let mut list = VecDeque::with_capacity(values.len());
                for value in values {
                    list.push_front(value.clone());
                }
                let len = list.len();
                vacant.insert(Value::List(list));
                Ok(len)
            }
        }
    }

    async fn list_range(&self, key: &str, start: i64, end: i64) -> StoreResult<Vec<String>> {
        match self.entries.get(key).as_deref() {
            None => Ok(Vec::new()),
            Some(Value::List(list)) => Ok(resolve_range(list.len(), start, end)
                .map(|(from, to)| list.range(from..=to).cloned().collect())
                .unwrap_or_default()),
            Some(other) => Err(StoreError::wrong_type(key, ValueKind::List, other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn increment_starts_at_one() {
        let store = MemoryStore::new();

        assert_eq!(store.increment("c").await.unwrap(), 1);
        assert_eq!(store.increment("c").await.unwrap(), 2);
        assert_eq!(store.get("c").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn increment_rejects_non_integer() {
        let store = MemoryStore::new();
        store.set("c", "abc".to_string()).await.unwrap();

        let result = store.increment("c").await;
        assert!(matches!(result, Err(StoreError::NotAnInteger(_))));
    }

    #[tokio::test]
    async fn increment_continues_from_set_value() {
        let store = MemoryStore::new();
        store.set("c", "41".to_string()).await.unwrap();

        assert_eq!(store.increment("c").await.unwrap(), 42);
    }

    #[tokio::test]
    async fn hash_set_merges_fields() {
        let store = MemoryStore::new();
        let mut first = FieldMap::new();
        first.insert("name".into(), "x".into());
        first.insert("done".into(), "False".into());
        store.hash_set("h", first).await.unwrap();

        let mut second = FieldMap::new();
        second.insert("done".into(), "True".into());
        store.hash_set("h", second).await.unwrap();

        let all = store.hash_get_all("h").await.unwrap();
        assert_eq!(all.get("name").map(String::as_str), Some("x"));
        assert_eq!(all.get("done").map(String::as_str), Some("True"));
    }

    #[tokio::test]
    async fn hash_get_all_missing_is_empty() {
        let store = MemoryStore::new();
        assert!(store.hash_get_all("nope").await.unwrap().is_empty());
        assert!(!store.exists("nope").await.unwrap());
    }

    #[tokio::test]
    async fn wrong_type_is_reported() {
        let store = MemoryStore::new();
        store.set_add("s", &strings(&["1"])).await.unwrap();

        let result = store.hash_get_all("s").await;
        assert!(matches!(
            result,
            Err(StoreError::WrongType {
                expected: ValueKind::Hash,
                found: ValueKind::Set,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn set_add_is_idempotent() {
        let store = MemoryStore::new();

        assert_eq!(store.set_add("s", &strings(&["1", "2"])).await.unwrap(), 2);
        assert_eq!(store.set_add("s", &strings(&["2", "3"])).await.unwrap(), 1);
        assert_eq!(store.set_members("s").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn emptied_set_is_removed() {
        let store = MemoryStore::new();
        store.set_add("s", &strings(&["1"])).await.unwrap();

        assert_eq!(store.set_remove("s", &strings(&["1", "9"])).await.unwrap(), 1);
        assert!(!store.exists("s").await.unwrap());
        assert_eq!(store.set_remove("s", &strings(&["1"])).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_push_prepends() {
        let store = MemoryStore::new();

        assert_eq!(store.list_push("l", &strings(&["a", "b", "c"])).await.unwrap(), 3);
        assert_eq!(
            store.list_range("l", 0, -1).await.unwrap(),
            strings(&["c", "b", "a"])
        );

        store.list_push("l", &strings(&["d"])).await.unwrap();
        assert_eq!(store.list_range("l", 0, 0).await.unwrap(), strings(&["d"]));
    }

    #[tokio::test]
    async fn list_push_nothing_creates_nothing() {
        let store = MemoryStore::new();

        assert_eq!(store.list_push("l", &[]).await.unwrap(), 0);
        assert!(!store.exists("l").await.unwrap());
    }

    #[tokio::test]
    async fn delete_reports_removal() {
        let store = MemoryStore::new();
        store.set("k", "v".into()).await.unwrap();

        assert!(store.delete("k").await.unwrap());
        assert!(!store.delete("k").await.unwrap());
        assert!(store.is_empty());

        store.set("a", "1".into()).await.unwrap();
        store.set_add("b", &strings(&["x"])).await.unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v".into()).await.unwrap();

        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(other.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_are_unique() {
        let store = MemoryStore::new();
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let mut seen = Vec::new();
                for _ in 0..50 {
                    seen.push(store.increment("c").await.unwrap());
                }
                seen
            }));
        }

        let mut all = Vec::new();
        for handle in handles {
            all.extend(handle.await.unwrap());
        }
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 400);
        assert_eq!(all.last(), Some(&400));
    }

    #[test]
    fn resolve_range_cases() {
        assert_eq!(resolve_range(0, 0, -1), None);
        assert_eq!(resolve_range(3, 0, -1), Some((0, 2)));
        assert_eq!(resolve_range(3, -2, -1), Some((1, 2)));
        assert_eq!(resolve_range(3, 1, 100), Some((1, 2)));
        assert_eq!(resolve_range(3, -100, 0), Some((0, 0)));
        assert_eq!(resolve_range(3, 2, 1), None);
        assert_eq!(resolve_range(3, 5, 8), None);
        assert_eq!(resolve_range(3, 0, -4), None);
    }

    proptest! {
        #[test]
        fn prop_resolve_range_stays_in_bounds(
            len in 0..20usize,
            start in -30..30i64,
            end in -30..30i64,
        ) {
            if let Some((from, to)) = resolve_range(len, start, end) {
                prop_assert!(from <= to);
                prop_assert!(to < len);
            }
        }
    }
}

//! Generic async keyed object store.
//!
//! A flat key-value container used as the persistence collaborator by the
//! domain services. The trait is deliberately small: no transactions, no
//! compare-and-swap, no ordering guarantees on enumeration.

use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Async keyed store mapping identifiers to owned values.
///
/// Every operation is atomic on its own; callers that need multi-step
/// invariants (e.g. read-then-write) must coordinate above this trait.
#[async_trait]
pub trait ObjectCache<K, V>: Send + Sync
where
    K: Send + Sync,
    V: Send + Sync,
{
    /// Insert a value under `key`. Behavior on a duplicate key is
    /// implementation-defined.
    async fn add(&self, key: K, value: V);

    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &K) -> Option<V>;

    /// Enumerate all stored values, in no particular order.
    async fn get_all(&self) -> Vec<V>;

    /// Replace the value stored under `key`. Callers guarantee the key
    /// already exists.
    async fn update(&self, key: K, value: V);

    /// Remove the value stored under `key`. Returns `false` when the key
    /// was absent.
    async fn delete(&self, key: &K) -> bool;
}

/// In-memory implementation backed by a `HashMap` behind a tokio `RwLock`.
///
/// Cloning is cheap and clones share the same underlying map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryObjectCache<K, V> {
    entries: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> InMemoryObjectCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl<K, V> ObjectCache<K, V> for InMemoryObjectCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    async fn add(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        entries.insert(key, value);
    }

    async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    async fn get_all(&self) -> Vec<V> {
        let entries = self.entries.read().await;
        entries.values().cloned().collect()
    }

    async fn update(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        entries.insert(key, value);
    }

    async fn delete(&self, key: &K) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_and_get() {
        let cache = InMemoryObjectCache::new();

        cache.add(1u32, "one".to_string()).await;

        assert_eq!(cache.get(&1).await, Some("one".to_string()));
        assert_eq!(cache.get(&2).await, None);
    }

    #[tokio::test]
    async fn test_get_all_returns_every_value() {
        let cache = InMemoryObjectCache::new();

        cache.add(1u32, "one".to_string()).await;
        cache.add(2, "two".to_string()).await;
        cache.add(3, "three".to_string()).await;

        let mut values = cache.get_all().await;
        values.sort();
        assert_eq!(values, vec!["one", "three", "two"]);
    }

    #[tokio::test]
    async fn test_update_replaces_value() {
        let cache = InMemoryObjectCache::new();

        cache.add(1u32, "one".to_string()).await;
        cache.update(1, "uno".to_string()).await;

        assert_eq!(cache.get(&1).await, Some("uno".to_string()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_removes_value() {
        let cache = InMemoryObjectCache::new();

        cache.add(1u32, "one".to_string()).await;

        assert!(cache.delete(&1).await);
        assert!(!cache.delete(&1).await);
        assert_eq!(cache.get(&1).await, None);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let cache = InMemoryObjectCache::new();
        let other = cache.clone();

        cache.add(1u32, "one".to_string()).await;

        assert_eq!(other.get(&1).await, Some("one".to_string()));
    }
}

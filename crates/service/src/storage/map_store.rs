use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Generic in-memory key-value map guarded by a single lock.
///
/// Every mutating helper holds the write guard for its whole
/// check-then-act sequence, so callers never observe a half-applied change.
/// Clones share the same underlying map.
#[derive(Clone)]
pub struct MapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> Default for MapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }
}

impl<K, V> MapStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Insert only if the key is vacant. Returns `false` and leaves the map
    /// untouched when the key is already present.
    pub async fn insert_new(&self, key: K, value: V) -> bool {
        let mut map = self.inner.write().await;
        if map.contains_key(&key) {
            return false;
        }
        map.insert(key, value);
        true
    }

    /// Remove a key; returns the previous value if it existed.
    pub async fn remove(&self, key: &K) -> Option<V> {
        let mut map = self.inner.write().await;
        map.remove(key)
    }

    /// Apply a mutation to the underlying map under the write lock.
    pub async fn update_map<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<R, ServiceError>,
    {
        let mut map = self.inner.write().await;
        f(&mut map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn map_store_crud() -> Result<(), anyhow::Error> {
        let store = MapStore::<String, String>::new();

        // initially empty
        assert!(store.is_empty().await);

        assert!(store.insert_new("a".into(), "1".into()).await);
        assert!(store.insert_new("b".into(), "2".into()).await);
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("1"));

        // occupied keys are not overwritten
        assert!(!store.insert_new("a".into(), "other".into()).await);
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("1"));

        let updated = store
            .update_map(|m| {
                let v = m.get_mut("a").ok_or_else(|| ServiceError::not_found("a"))?;
                *v = "10".into();
                Ok(v.clone())
            })
            .await?;
        assert_eq!(updated, "10");
        assert_eq!(store.get(&"a".into()).await.as_deref(), Some("10"));

        assert_eq!(store.remove(&"b".into()).await.as_deref(), Some("2"));
        assert_eq!(store.remove(&"b".into()).await, None);
        assert_eq!(store.len().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_map_error_leaves_map_untouched() {
        let store = MapStore::<String, String>::new();
        let res: Result<(), _> = store
            .update_map(|m| {
                m.get_mut("missing").ok_or_else(|| ServiceError::not_found("missing"))?;
                Ok(())
            })
            .await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let a = MapStore::<u32, u32>::new();
        let b = a.clone();
        a.insert_new(1, 1).await;
        assert_eq!(b.get(&1).await, Some(1));
    }
}

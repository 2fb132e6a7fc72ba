use std::sync::Arc;

use async_trait::async_trait;
use models::{Item, ItemKey};
use tracing::{debug, info};

use crate::errors::ServiceError;
use crate::items::store::ItemStore;
use crate::metrics::{self, Op, Outcome};
use crate::storage::map_store::MapStore;

/// Process-lifetime item store. Starts empty and is never persisted.
#[derive(Clone, Default)]
pub struct MemoryItemStore {
    map: MapStore<ItemKey, Item>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh store behind the trait object handed to the HTTP layer.
    pub fn shared() -> Arc<dyn ItemStore> {
        Arc::new(Self::new())
    }

    pub async fn create(&self, item: Item) -> Result<Item, ServiceError> {
        let key = match item.key() {
            Ok(k) => k,
            Err(e) => {
                metrics::record(Op::Create, Outcome::Invalid);
                return Err(e.into());
            }
        };
        if !self.map.insert_new(key.clone(), item.clone()).await {
            info!(%key, "create rejected, id already present");
            metrics::record(Op::Create, Outcome::Conflict);
            return Err(ServiceError::conflict(&key));
        }
        metrics::record(Op::Create, Outcome::Ok);
        debug!(%key, "item created");
        Ok(item)
    }

    pub async fn get(&self, id: &str) -> Result<Item, ServiceError> {
        let found = match ItemKey::new(id) {
            Ok(key) => self.map.get(&key).await,
            Err(_) => None,
        };
        match found {
            Some(item) => {
                metrics::record(Op::Read, Outcome::Ok);
                Ok(item)
            }
            None => {
                debug!(id, "item not found");
                metrics::record(Op::Read, Outcome::NotFound);
                Err(ServiceError::not_found("item"))
            }
        }
    }

    pub async fn update(&self, item: Item) -> Result<Item, ServiceError> {
        let key = match item.key() {
            Ok(k) => k,
            Err(e) => {
                metrics::record(Op::Update, Outcome::Invalid);
                return Err(e.into());
            }
        };
        let res = self
            .map
            .update_map(|map| {
                let existing = map.get_mut(&key).ok_or_else(|| ServiceError::not_found("record"))?;
                existing.value = item.value;
                Ok(existing.clone())
            })
            .await;
        match &res {
            Ok(_) => {
                debug!(%key, "item updated");
                metrics::record(Op::Update, Outcome::Ok);
            }
            Err(_) => {
                info!(%key, "update rejected, no such record");
                metrics::record(Op::Update, Outcome::NotFound);
            }
        }
        res
    }

    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let removed = match ItemKey::new(id) {
            Ok(key) => self.map.remove(&key).await,
            Err(_) => None,
        };
        if removed.is_none() {
            info!(id, "delete rejected, no such record");
            metrics::record(Op::Delete, Outcome::NotFound);
            return Err(ServiceError::not_found("record"));
        }
        metrics::record(Op::Delete, Outcome::Ok);
        debug!(id, "item deleted");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.map.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.map.is_empty().await
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn create(&self, item: Item) -> Result<Item, ServiceError> { self.create(item).await }
    async fn get(&self, id: &str) -> Result<Item, ServiceError> { self.get(id).await }
    async fn update(&self, item: Item) -> Result<Item, ServiceError> { self.update(item).await }
    async fn delete(&self, id: &str) -> Result<(), ServiceError> { self.delete(id).await }
    async fn len(&self) -> usize { self.len().await }
}

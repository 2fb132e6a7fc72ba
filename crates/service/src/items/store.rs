use async_trait::async_trait;
use models::Item;

use crate::errors::ServiceError;

/// Trait abstraction for item storage.
/// Handlers only see this trait, so tests can inject a fresh store.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Store a new item. Fails with `Conflict` if the id is taken.
    async fn create(&self, item: Item) -> Result<Item, ServiceError>;
    /// Fetch by raw (un-namespaced) id. Empty ids are `NotFound`.
    async fn get(&self, id: &str) -> Result<Item, ServiceError>;
    /// Replace the value of an existing item. Never creates.
    async fn update(&self, item: Item) -> Result<Item, ServiceError>;
    /// Remove an existing item.
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::keys::{list_items_key, owner_scope_pattern};
use crate::cache::models::item::CachedItem;
use crate::cache::operations::Cache;
use crate::database::models::item::{NewItem, TodoItem, UpdateItemInput};
use crate::error::AppError;
use crate::service::TodoItemService;

/// Cache-aside wrapper around an item service.
///
/// Item aggregates are cached per list, nested under the owner's list
/// scope, so the same pattern delete that clears list entries clears them
/// too. Single-item reads pass straight through: a bare item id carries no
/// list id, and the key scheme deliberately avoids the bookkeeping an
/// out-of-scope key would need.
pub struct CachedItemService {
    inner: Arc<dyn TodoItemService>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CachedItemService {
    pub fn new(inner: Arc<dyn TodoItemService>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    async fn lookup(&self, key: &str) -> Option<Vec<CachedItem>> {
        match self.cache.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => {
                    tracing::debug!("cache hit: {}", key);
                    Some(items)
                }
                Err(e) => {
                    tracing::error!("failed to decode cache entry {}: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::error!("cache lookup failed for {}: {}", key, e);
                None
            }
        }
    }

    async fn populate(&self, key: &str, items: &[CachedItem]) {
        match serde_json::to_string(items) {
            Ok(json) => {
                if let Err(e) = self.cache.set(key, &json, self.ttl).await {
                    tracing::error!("failed to populate cache entry {}: {}", key, e);
                } else {
                    tracing::debug!("cache populate: {}", key);
                }
            }
            Err(e) => tracing::error!("failed to encode cache entry {}: {}", key, e),
        }
    }

    async fn invalidate_scope(&self, owner_id: i32) {
        let pattern = owner_scope_pattern(owner_id);
        if let Err(e) = self.cache.delete_matching(&pattern).await {
            tracing::error!("failed to invalidate cache scope {}: {}", pattern, e);
        }
    }
}

#[async_trait]
impl TodoItemService for CachedItemService {
    async fn create(&self, owner_id: i32, list_id: i32, input: NewItem) -> Result<i32, AppError> {
        let result = self.inner.create(owner_id, list_id, input).await;
        self.invalidate_scope(owner_id).await;
        result
    }

    async fn get_all(&self, owner_id: i32, list_id: i32) -> Result<Vec<TodoItem>, AppError> {
        let key = list_items_key(owner_id, list_id);

        if let Some(cached) = self.lookup(&key).await {
            return Ok(cached.into_iter().map(TodoItem::from).collect());
        }

        let items = self.inner.get_all(owner_id, list_id).await?;

        let snapshot: Vec<CachedItem> = items.iter().map(CachedItem::from).collect();
        self.populate(&key, &snapshot).await;

        Ok(items)
    }

    async fn get_by_id(&self, owner_id: i32, item_id: i32) -> Result<TodoItem, AppError> {
        self.inner.get_by_id(owner_id, item_id).await
    }

    async fn update(
        &self,
        owner_id: i32,
        item_id: i32,
        input: UpdateItemInput,
    ) -> Result<(), AppError> {
        let result = self.inner.update(owner_id, item_id, input).await;
        self.invalidate_scope(owner_id).await;
        result
    }

    async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), AppError> {
        let result = self.inner.delete(owner_id, item_id).await;
        self.invalidate_scope(owner_id).await;
        result
    }
}

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::keys::{owner_list_key, owner_lists_key, owner_scope_pattern};
use crate::cache::models::list::CachedList;
use crate::cache::operations::Cache;
use crate::database::models::list::{NewList, TodoList, UpdateListInput};
use crate::error::AppError;
use crate::service::TodoListService;

/// Cache-aside wrapper around a list service.
///
/// Reads go cache-first and fall back to the inner service; writes go to
/// the inner service and then clear the owner's whole cache scope with one
/// pattern delete. The cache is best-effort throughout: no cache failure
/// ever fails a request, and a reader can observe data at most
/// `max(TTL, one invalidation round trip)` old.
pub struct CachedListService {
    inner: Arc<dyn TodoListService>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl CachedListService {
    pub fn new(inner: Arc<dyn TodoListService>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { inner, cache, ttl }
    }

    /// A hit that fails to decode is a cache fault, not a data fault: the
    /// caller falls through to the store and overwrites the entry.
    async fn lookup<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => {
                    tracing::debug!("cache hit: {}", key);
                    Some(value)
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

    async fn populate<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
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

    /// Clears the aggregate and every nested entry for the owner in one
    /// pattern delete. A failure here is logged and accepted: the entries
    /// expire by TTL.
    async fn invalidate_scope(&self, owner_id: i32) {
        let pattern = owner_scope_pattern(owner_id);
        if let Err(e) = self.cache.delete_matching(&pattern).await {
            tracing::error!("failed to invalidate cache scope {}: {}", pattern, e);
        }
    }
}

#[async_trait]
impl TodoListService for CachedListService {
    async fn create(&self, owner_id: i32, input: NewList) -> Result<i32, AppError> {
        let result = self.inner.create(owner_id, input).await;
        self.invalidate_scope(owner_id).await;
        result
    }

    async fn get_all(&self, owner_id: i32) -> Result<Vec<TodoList>, AppError> {
        let key = owner_lists_key(owner_id);

        if let Some(cached) = self.lookup::<Vec<CachedList>>(&key).await {
            return Ok(cached.into_iter().map(TodoList::from).collect());
        }

        let lists = self.inner.get_all(owner_id).await?;

        let snapshot: Vec<CachedList> = lists.iter().map(CachedList::from).collect();
        self.populate(&key, &snapshot).await;

        Ok(lists)
    }

    async fn get_by_id(&self, owner_id: i32, list_id: i32) -> Result<TodoList, AppError> {
        let key = owner_list_key(owner_id, list_id);

        if let Some(cached) = self.lookup::<CachedList>(&key).await {
            return Ok(TodoList::from(cached));
        }

        let list = self.inner.get_by_id(owner_id, list_id).await?;

        self.populate(&key, &CachedList::from(&list)).await;

        Ok(list)
    }

    async fn update(
        &self,
        owner_id: i32,
        list_id: i32,
        input: UpdateListInput,
    ) -> Result<(), AppError> {
        let result = self.inner.update(owner_id, list_id, input).await;
        self.invalidate_scope(owner_id).await;
        result
    }

    async fn delete(&self, owner_id: i32, list_id: i32) -> Result<(), AppError> {
        let result = self.inner.delete(owner_id, list_id).await;
        self.invalidate_scope(owner_id).await;
        result
    }
}

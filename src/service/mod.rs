// Service module
// Cache-unaware domain services plus the cache-aside wrappers around them.
// The transport layer talks to the traits and cannot tell the two apart.

use async_trait::async_trait;
use redis::Client as RedisClient;
use sqlx::PgPool;
use std::sync::Arc;

use crate::cache::operations::{Cache, RedisCache};
use crate::config::Config;
use crate::database::models::item::{NewItem, TodoItem, UpdateItemInput};
use crate::database::models::list::{NewList, TodoList, UpdateListInput};
use crate::database::operations::{ItemOperation, ListOperation, UserOperation};
use crate::error::AppError;

pub mod cached_item;
pub mod cached_list;
pub mod item;
pub mod list;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use cached_item::CachedItemService;
pub use cached_list::CachedListService;
pub use item::ItemService;
pub use list::ListService;
pub use user::UserService;

/// List operations, parameterized by the authenticated owner. Supplied by
/// the external auth layer; never trusted from the entity itself.
#[async_trait]
pub trait TodoListService: Send + Sync {
    async fn create(&self, owner_id: i32, input: NewList) -> Result<i32, AppError>;
    async fn get_all(&self, owner_id: i32) -> Result<Vec<TodoList>, AppError>;
    async fn get_by_id(&self, owner_id: i32, list_id: i32) -> Result<TodoList, AppError>;
    async fn update(
        &self,
        owner_id: i32,
        list_id: i32,
        input: UpdateListInput,
    ) -> Result<(), AppError>;
    async fn delete(&self, owner_id: i32, list_id: i32) -> Result<(), AppError>;
}

/// Item operations at the List↔Item granularity, owner-scoped like lists.
#[async_trait]
pub trait TodoItemService: Send + Sync {
    async fn create(&self, owner_id: i32, list_id: i32, input: NewItem) -> Result<i32, AppError>;
    async fn get_all(&self, owner_id: i32, list_id: i32) -> Result<Vec<TodoItem>, AppError>;
    async fn get_by_id(&self, owner_id: i32, item_id: i32) -> Result<TodoItem, AppError>;
    async fn update(
        &self,
        owner_id: i32,
        item_id: i32,
        input: UpdateItemInput,
    ) -> Result<(), AppError>;
    async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), AppError>;
}

/// Composition root: repositories -> domain services -> cached wrappers.
pub struct Services {
    pub users: UserService,
    pub lists: Arc<CachedListService>,
    pub items: Arc<CachedItemService>,
}

impl Services {
    pub fn new(pool: PgPool, redis: Arc<RedisClient>, config: &Config) -> Self {
        let db = Arc::new(pool);
        let cache: Arc<dyn Cache> = Arc::new(RedisCache::new(redis));

        let lists = Arc::new(CachedListService::new(
            Arc::new(ListService::new(ListOperation::new(db.clone()))),
            cache.clone(),
            config.cache_ttl(),
        ));
        let items = Arc::new(CachedItemService::new(
            Arc::new(ItemService::new(
                ItemOperation::new(db.clone()),
                ListOperation::new(db.clone()),
            )),
            cache,
            config.cache_ttl(),
        ));
        let users = UserService::new(UserOperation::new(db));

        Self {
            users,
            lists,
            items,
        }
    }
}

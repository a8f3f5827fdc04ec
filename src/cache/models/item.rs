use serde::{Deserialize, Serialize};

use crate::database::models::item::TodoItem;

/// Item snapshot as stored in the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl From<&TodoItem> for CachedItem {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            done: item.done,
        }
    }
}

impl From<CachedItem> for TodoItem {
    fn from(cached: CachedItem) -> Self {
        Self {
            id: cached.id,
            title: cached.title,
            description: cached.description,
            done: cached.done,
        }
    }
}

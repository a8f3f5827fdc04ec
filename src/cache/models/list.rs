use serde::{Deserialize, Serialize};

use crate::database::models::list::TodoList;

/// List snapshot as stored in the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedList {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl From<&TodoList> for CachedList {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id,
            title: list.title.clone(),
            description: list.description.clone(),
        }
    }
}

impl From<CachedList> for TodoList {
    fn from(cached: CachedList) -> Self {
        Self {
            id: cached.id,
            title: cached.title,
            description: cached.description,
        }
    }
}

// In-memory stand-ins for the cache and the domain services. The cache
// fake honors TTLs against the tokio clock so paused-clock tests can drive
// expiry deterministically.

use async_trait::async_trait;
use redis::{ErrorKind, RedisError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

use crate::cache::operations::Cache;
use crate::database::models::item::{NewItem, TodoItem, UpdateItemInput};
use crate::database::models::list::{NewList, TodoList, UpdateListInput};
use crate::error::AppError;
use crate::service::{TodoItemService, TodoListService};

fn cache_down() -> RedisError {
    RedisError::from((ErrorKind::IoError, "cache down"))
}

#[derive(Default)]
pub(crate) struct FakeCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
    pub fail_gets: AtomicBool,
    pub fail_sets: AtomicBool,
    pub fail_deletes: AtomicBool,
}

impl FakeCache {
    pub fn seed(&self, key: &str, value: &str, ttl: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .is_some_and(|(_, deadline)| Instant::now() < *deadline)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl Cache for FakeCache {
    async fn get(&self, key: &str) -> Result<Option<String>, RedisError> {
        if self.fail_gets.load(Ordering::Relaxed) {
            return Err(cache_down());
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .filter(|(_, deadline)| Instant::now() < *deadline)
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), RedisError> {
        if self.fail_sets.load(Ordering::Relaxed) {
            return Err(cache_down());
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn delete_matching(&self, pattern: &str) -> Result<(), RedisError> {
        if self.fail_deletes.load(Ordering::Relaxed) {
            return Err(cache_down());
        }
        let prefix = pattern.trim_end_matches('*');
        self.entries
            .lock()
            .unwrap()
            .retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}

#[derive(Default)]
struct FakeListState {
    next_id: i32,
    lists: Vec<(i32, TodoList)>,
}

/// In-memory list service mirroring the repository contract: join-row
/// visibility, no-op updates for non-owned ids, store-assigned ids.
#[derive(Default)]
pub(crate) struct FakeListService {
    state: Mutex<FakeListState>,
    /// Authoritative fetches observed (cache misses reach here).
    pub fetches: AtomicUsize,
}

#[async_trait]
impl TodoListService for FakeListService {
    async fn create(&self, owner_id: i32, input: NewList) -> Result<i32, AppError> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.lists.push((
            owner_id,
            TodoList {
                id,
                title: input.title,
                description: input.description,
            },
        ));
        Ok(id)
    }

    async fn get_all(&self, owner_id: i32) -> Result<Vec<TodoList>, AppError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let state = self.state.lock().unwrap();
        Ok(state
            .lists
            .iter()
            .filter(|(owner, _)| *owner == owner_id)
            .map(|(_, list)| list.clone())
            .collect())
    }

    async fn get_by_id(&self, owner_id: i32, list_id: i32) -> Result<TodoList, AppError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let state = self.state.lock().unwrap();
        state
            .lists
            .iter()
            .find(|(owner, list)| *owner == owner_id && list.id == list_id)
            .map(|(_, list)| list.clone())
            .ok_or(AppError::NotFound)
    }

    async fn update(
        &self,
        owner_id: i32,
        list_id: i32,
        input: UpdateListInput,
    ) -> Result<(), AppError> {
        input.validate()?;
        let mut state = self.state.lock().unwrap();
        if let Some((_, list)) = state
            .lists
            .iter_mut()
            .find(|(owner, list)| *owner == owner_id && list.id == list_id)
        {
            if let Some(title) = input.title {
                list.title = title;
            }
            if let Some(description) = input.description {
                list.description = description;
            }
        }
        Ok(())
    }

    async fn delete(&self, owner_id: i32, list_id: i32) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state
            .lists
            .retain(|(owner, list)| !(*owner == owner_id && list.id == list_id));
        Ok(())
    }
}

#[derive(Default)]
struct FakeItemState {
    next_id: i32,
    known_lists: Vec<(i32, i32)>,
    items: Vec<(i32, i32, TodoItem)>,
}

#[derive(Default)]
pub(crate) struct FakeItemService {
    state: Mutex<FakeItemState>,
    pub fetches: AtomicUsize,
}

impl FakeItemService {
    pub fn register_list(&self, owner_id: i32, list_id: i32) {
        self.state
            .lock()
            .unwrap()
            .known_lists
            .push((owner_id, list_id));
    }
}

#[async_trait]
impl TodoItemService for FakeItemService {
    async fn create(&self, owner_id: i32, list_id: i32, input: NewItem) -> Result<i32, AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.known_lists.contains(&(owner_id, list_id)) {
            return Err(AppError::NotFound);
        }
        state.next_id += 1;
        let id = state.next_id;
        state.items.push((
            owner_id,
            list_id,
            TodoItem {
                id,
                title: input.title,
                description: input.description,
                done: false,
            },
        ));
        Ok(id)
    }

    async fn get_all(&self, owner_id: i32, list_id: i32) -> Result<Vec<TodoItem>, AppError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let state = self.state.lock().unwrap();
        Ok(state
            .items
            .iter()
            .filter(|(owner, list, _)| *owner == owner_id && *list == list_id)
            .map(|(_, _, item)| item.clone())
            .collect())
    }

    async fn get_by_id(&self, owner_id: i32, item_id: i32) -> Result<TodoItem, AppError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let state = self.state.lock().unwrap();
        state
            .items
            .iter()
            .find(|(owner, _, item)| *owner == owner_id && item.id == item_id)
            .map(|(_, _, item)| item.clone())
            .ok_or(AppError::NotFound)
    }

    async fn update(
        &self,
        owner_id: i32,
        item_id: i32,
        input: UpdateItemInput,
    ) -> Result<(), AppError> {
        input.validate()?;
        let mut state = self.state.lock().unwrap();
        if let Some((_, _, item)) = state
            .items
            .iter_mut()
            .find(|(owner, _, item)| *owner == owner_id && item.id == item_id)
        {
            if let Some(title) = input.title {
                item.title = title;
            }
            if let Some(description) = input.description {
                item.description = description;
            }
            if let Some(done) = input.done {
                item.done = done;
            }
        }
        Ok(())
    }

    async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state
            .items
            .retain(|(owner, _, item)| !(*owner == owner_id && item.id == item_id));
        Ok(())
    }
}

use async_trait::async_trait;

use crate::database::models::item::{NewItem, TodoItem, UpdateItemInput};
use crate::database::operations::{ItemOperation, ListOperation};
use crate::error::AppError;
use crate::service::TodoItemService;

/// Cache-unaware item service. Creation resolves the target list through
/// the ownership join first, so an item can only land in a list the caller
/// can see.
pub struct ItemService {
    items: ItemOperation,
    lists: ListOperation,
}

impl ItemService {
    pub fn new(items: ItemOperation, lists: ListOperation) -> Self {
        Self { items, lists }
    }
}

#[async_trait]
impl TodoItemService for ItemService {
    async fn create(&self, owner_id: i32, list_id: i32, input: NewItem) -> Result<i32, AppError> {
        self.lists
            .get_by_id(owner_id, list_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let id = self.items.create(list_id, &input).await?;
        Ok(id)
    }

    async fn get_all(&self, owner_id: i32, list_id: i32) -> Result<Vec<TodoItem>, AppError> {
        Ok(self.items.get_all(owner_id, list_id).await?)
    }

    async fn get_by_id(&self, owner_id: i32, item_id: i32) -> Result<TodoItem, AppError> {
        self.items
            .get_by_id(owner_id, item_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update(
        &self,
        owner_id: i32,
        item_id: i32,
        input: UpdateItemInput,
    ) -> Result<(), AppError> {
        input.validate()?;
        self.items.update(owner_id, item_id, &input).await?;
        Ok(())
    }

    async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), AppError> {
        self.items.delete(owner_id, item_id).await?;
        Ok(())
    }
}

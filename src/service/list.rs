use async_trait::async_trait;

use crate::database::models::list::{NewList, TodoList, UpdateListInput};
use crate::database::operations::ListOperation;
use crate::error::AppError;
use crate::service::TodoListService;

/// Cache-unaware list service: validation plus the ownership-scoped
/// repository. Everything here is authoritative.
pub struct ListService {
    lists: ListOperation,
}

impl ListService {
    pub fn new(lists: ListOperation) -> Self {
        Self { lists }
    }
}

#[async_trait]
impl TodoListService for ListService {
    async fn create(&self, owner_id: i32, input: NewList) -> Result<i32, AppError> {
        let id = self.lists.create(owner_id, &input).await?;
        Ok(id)
    }

    async fn get_all(&self, owner_id: i32) -> Result<Vec<TodoList>, AppError> {
        Ok(self.lists.get_all(owner_id).await?)
    }

    async fn get_by_id(&self, owner_id: i32, list_id: i32) -> Result<TodoList, AppError> {
        self.lists
            .get_by_id(owner_id, list_id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn update(
        &self,
        owner_id: i32,
        list_id: i32,
        input: UpdateListInput,
    ) -> Result<(), AppError> {
        input.validate()?;
        self.lists.update(owner_id, list_id, &input).await?;
        Ok(())
    }

    async fn delete(&self, owner_id: i32, list_id: i32) -> Result<(), AppError> {
        self.lists.delete(owner_id, list_id).await?;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TodoItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

impl UpdateItemInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.is_none() && self.description.is_none() && self.done.is_none() {
            return Err(AppError::Validation(
                "update request has no fields".to_string(),
            ));
        }
        Ok(())
    }
}

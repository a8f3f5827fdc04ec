use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TodoList {
    pub id: i32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewList {
    pub title: String,
    pub description: String,
}

/// Partial update: only the supplied fields are touched. An input naming
/// zero fields is rejected before any SQL is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateListInput {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateListInput {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.is_none() && self.description.is_none() {
            return Err(AppError::Validation(
                "update request has no fields".to_string(),
            ));
        }
        Ok(())
    }
}

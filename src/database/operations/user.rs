use sqlx::PgPool;
use std::sync::Arc;

use crate::database::models::user::UserEntity;

/// User repository. Usernames are unique at the schema level; a duplicate
/// insert surfaces as SQLSTATE 23505.
pub struct UserOperation {
    db: Arc<PgPool>,
}

impl UserOperation {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<i32, sqlx::Error> {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO users (name, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&*self.db)
        .await?;

        tracing::info!("created user {}", id);
        Ok(id)
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, name, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&*self.db)
        .await
    }
}

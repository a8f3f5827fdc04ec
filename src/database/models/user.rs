use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserEntity {
    pub id: i32,
    pub name: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration input. The plaintext password never reaches the database;
/// the user service hashes it first.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub password: String,
}

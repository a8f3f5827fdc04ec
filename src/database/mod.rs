// Database module
// Entity definitions and ownership-scoped repository operations

pub mod models;
pub mod operations;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use models::user::UserEntity;
pub use operations::user::UserOperation;

/// Embedded schema migrations from `migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

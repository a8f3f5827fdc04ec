use sqlx::PgPool;
use std::sync::Arc;

use crate::database::models::list::{NewList, TodoList, UpdateListInput};

/// List repository. Every query joins through `users_lists`: a list row
/// without a relation row for the caller does not exist as far as these
/// operations are concerned.
pub struct ListOperation {
    db: Arc<PgPool>,
}

impl ListOperation {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }

    /// Inserts the list row and its ownership relation in one transaction.
    /// If either insert fails, neither row survives.
    pub async fn create(&self, owner_id: i32, input: &NewList) -> Result<i32, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let (list_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO todo_lists (title, description)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO users_lists (user_id, list_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(owner_id)
        .bind(list_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!("created list {} for owner {}", list_id, owner_id);
        Ok(list_id)
    }

    /// Empty result for an unknown owner, not an error.
    pub async fn get_all(&self, owner_id: i32) -> Result<Vec<TodoList>, sqlx::Error> {
        sqlx::query_as::<_, TodoList>(
            r#"
            SELECT tl.id, tl.title, tl.description
            FROM todo_lists tl
            INNER JOIN users_lists ul ON tl.id = ul.list_id
            WHERE ul.user_id = $1
            ORDER BY tl.id
            "#,
        )
        .bind(owner_id)
        .fetch_all(&*self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        owner_id: i32,
        list_id: i32,
    ) -> Result<Option<TodoList>, sqlx::Error> {
        sqlx::query_as::<_, TodoList>(
            r#"
            SELECT tl.id, tl.title, tl.description
            FROM todo_lists tl
            INNER JOIN users_lists ul ON tl.id = ul.list_id
            WHERE ul.user_id = $1 AND ul.list_id = $2
            "#,
        )
        .bind(owner_id)
        .bind(list_id)
        .fetch_optional(&*self.db)
        .await
    }

    /// Targeted update touching only the supplied fields, scoped by the
    /// ownership join. A non-owned id matches zero rows, which is not an
    /// error: absence of a match is indistinguishable from a legitimate
    /// no-op. Callers validate that at least one field is present.
    pub async fn update(
        &self,
        owner_id: i32,
        list_id: i32,
        input: &UpdateListInput,
    ) -> Result<(), sqlx::Error> {
        let sql = build_update_sql(input);

        let mut query = sqlx::query(&sql);
        if let Some(title) = &input.title {
            query = query.bind(title);
        }
        if let Some(description) = &input.description {
            query = query.bind(description);
        }

        query
            .bind(owner_id)
            .bind(list_id)
            .execute(&*self.db)
            .await?;

        Ok(())
    }

    /// Removes the list row; the relation rows cascade with it.
    pub async fn delete(&self, owner_id: i32, list_id: i32) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM todo_lists tl
            USING users_lists ul
            WHERE tl.id = ul.list_id AND ul.user_id = $1 AND ul.list_id = $2
            "#,
        )
        .bind(owner_id)
        .bind(list_id)
        .execute(&*self.db)
        .await?;

        Ok(())
    }
}

fn build_update_sql(input: &UpdateListInput) -> String {
    let mut sets = Vec::new();
    let mut idx = 1;
    if input.title.is_some() {
        sets.push(format!("title = ${idx}"));
        idx += 1;
    }
    if input.description.is_some() {
        sets.push(format!("description = ${idx}"));
        idx += 1;
    }

    format!(
        "UPDATE todo_lists tl SET {} FROM users_lists ul \
         WHERE tl.id = ul.list_id AND ul.user_id = ${} AND ul.list_id = ${}",
        sets.join(", "),
        idx,
        idx + 1
    )
}

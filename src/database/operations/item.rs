use sqlx::PgPool;
use std::sync::Arc;

use crate::database::models::item::{NewItem, TodoItem, UpdateItemInput};

/// Item repository. Reads and writes are scoped by the triple join
/// `todo_items -> lists_items -> users_lists`, so an item is only visible
/// through a list the caller owns.
pub struct ItemOperation {
    db: Arc<PgPool>,
}

impl ItemOperation {
    pub fn new(db: Arc<PgPool>) -> Self {
        Self { db }
    }

    /// Inserts the item row and its containment relation in one
    /// transaction. List ownership is checked by the service layer before
    /// this runs.
    pub async fn create(&self, list_id: i32, input: &NewItem) -> Result<i32, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        let (item_id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO todo_items (title, description, done)
            VALUES ($1, $2, FALSE)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO lists_items (list_id, item_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(list_id)
        .bind(item_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!("created item {} in list {}", item_id, list_id);
        Ok(item_id)
    }

    pub async fn get_all(&self, owner_id: i32, list_id: i32) -> Result<Vec<TodoItem>, sqlx::Error> {
        sqlx::query_as::<_, TodoItem>(
            r#"
            SELECT ti.id, ti.title, ti.description, ti.done
            FROM todo_items ti
            INNER JOIN lists_items li ON li.item_id = ti.id
            INNER JOIN users_lists ul ON ul.list_id = li.list_id
            WHERE li.list_id = $1 AND ul.user_id = $2
            ORDER BY ti.id
            "#,
        )
        .bind(list_id)
        .bind(owner_id)
        .fetch_all(&*self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        owner_id: i32,
        item_id: i32,
    ) -> Result<Option<TodoItem>, sqlx::Error> {
        sqlx::query_as::<_, TodoItem>(
            r#"
            SELECT ti.id, ti.title, ti.description, ti.done
            FROM todo_items ti
            INNER JOIN lists_items li ON li.item_id = ti.id
            INNER JOIN users_lists ul ON ul.list_id = li.list_id
            WHERE ti.id = $1 AND ul.user_id = $2
            "#,
        )
        .bind(item_id)
        .bind(owner_id)
        .fetch_optional(&*self.db)
        .await
    }

    /// Same contract as the list update: supplied fields only, ownership
    /// join scoping, zero matched rows is a no-op.
    pub async fn update(
        &self,
        owner_id: i32,
        item_id: i32,
        input: &UpdateItemInput,
    ) -> Result<(), sqlx::Error> {
        let sql = build_update_sql(input);

        let mut query = sqlx::query(&sql);
        if let Some(title) = &input.title {
            query = query.bind(title);
        }
        if let Some(description) = &input.description {
            query = query.bind(description);
        }
        if let Some(done) = input.done {
            query = query.bind(done);
        }

        query
            .bind(owner_id)
            .bind(item_id)
            .execute(&*self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            DELETE FROM todo_items ti
            USING lists_items li, users_lists ul
            WHERE ti.id = li.item_id AND li.list_id = ul.list_id
              AND ul.user_id = $1 AND ti.id = $2
            "#,
        )
        .bind(owner_id)
        .bind(item_id)
        .execute(&*self.db)
        .await?;

        Ok(())
    }
}

fn build_update_sql(input: &UpdateItemInput) -> String {
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
    if input.done.is_some() {
        sets.push(format!("done = ${idx}"));
        idx += 1;
    }

    format!(
        "UPDATE todo_items ti SET {} FROM lists_items li, users_lists ul \
         WHERE ti.id = li.item_id AND li.list_id = ul.list_id \
         AND ul.user_id = ${} AND ti.id = ${}",
        sets.join(", "),
        idx,
        idx + 1
    )
}

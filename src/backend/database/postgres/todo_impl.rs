use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{Todo, TodoPayload};

/// PostgreSQL statements for the `todos` table
pub struct PostgresTodoStore {
    pool: PgPool,
}

impl PostgresTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, todo: &TodoPayload) -> AppResult<Todo> {
        let created = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (user_id, title, description, completed, due_date) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(todo.user_id)
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed_or_default())
        .bind(todo.due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Todo>> {
        let todos = sqlx::query_as::<_, Todo>("SELECT * FROM todos ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(todos)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Todo>> {
        let todo = sqlx::query_as::<_, Todo>("SELECT * FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(todo)
    }

    pub async fn update(&self, id: i32, todo: &TodoPayload) -> AppResult<Option<Todo>> {
        let updated = sqlx::query_as::<_, Todo>(
            "UPDATE todos SET title = $1, description = $2, completed = $3, due_date = $4, \
             updated_at = NOW() WHERE id = $5 RETURNING *",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed_or_default())
        .bind(todo.due_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use super::{PostgresTodoStore, PostgresUserStore};
use crate::backend::{Backend, TodoBackend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{Todo, TodoPayload, User, UserPayload};

/// PostgreSQL database backend implementation
pub struct PostgresBackend {
    pool: PgPool,
    users: PostgresUserStore,
    todos: PostgresTodoStore,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: PostgresUserStore::new(pool.clone()),
            todos: PostgresTodoStore::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.connection_url)
            .await?;

        Ok(Self::new(pool))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn migrate(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool).await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl UserBackend for PostgresBackend {
    async fn create_user(&self, user: &UserPayload) -> AppResult<User> {
        self.users.insert(user).await
    }

    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn update_user(&self, id: i32, user: &UserPayload) -> AppResult<Option<User>> {
        self.users.update(id, user).await
    }

    async fn delete_user(&self, id: i32) -> AppResult<bool> {
        self.users.delete(id).await
    }
}

#[async_trait]
impl TodoBackend for PostgresBackend {
    async fn create_todo(&self, todo: &TodoPayload) -> AppResult<Todo> {
        self.todos.insert(todo).await
    }

    async fn find_all_todos(&self) -> AppResult<Vec<Todo>> {
        self.todos.find_all().await
    }

    async fn find_todo_by_id(&self, id: i32) -> AppResult<Option<Todo>> {
        self.todos.find_by_id(id).await
    }

    async fn update_todo(&self, id: i32, todo: &TodoPayload) -> AppResult<Option<Todo>> {
        self.todos.update(id, todo).await
    }

    async fn delete_todo(&self, id: i32) -> AppResult<bool> {
        self.todos.delete(id).await
    }
}

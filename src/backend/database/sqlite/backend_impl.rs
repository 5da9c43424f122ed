use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use super::{SqliteTodoStore, SqliteUserStore};
use crate::backend::{Backend, TodoBackend, UserBackend};
use crate::error::{AppError, AppResult};
use crate::models::{Todo, TodoPayload, User, UserPayload};

/// SQLite database backend implementation
pub struct SqliteBackend {
    pool: SqlitePool,
    users: SqliteUserStore,
    todos: SqliteTodoStore,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            users: SqliteUserStore::new(pool.clone()),
            todos: SqliteTodoStore::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let options = SqliteConnectOptions::from_str(&config.connection_url)
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        // An in-memory database disappears with its last connection
        if config.is_memory_database() {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

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
impl UserBackend for SqliteBackend {
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
impl TodoBackend for SqliteBackend {
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

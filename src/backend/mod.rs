use crate::error::AppResult;
use crate::models::{Todo, TodoPayload, User, UserPayload};
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;

use database::DatabaseBackendConfig;

/// Supported database backend types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
}

impl DatabaseType {
    /// Infer the dialect from a connection URL
    pub fn from_url(url: &str) -> Option<Self> {
        let url = url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Some(DatabaseType::PostgreSQL)
        } else if url.starts_with("sqlite:")
            || url == ":memory:"
            || url.ends_with(".db")
            || url.ends_with(".sqlite")
        {
            Some(DatabaseType::SQLite)
        } else {
            None
        }
    }
}

/// Core backend abstraction
///
/// Connection lifecycle and schema management shared by every storage
/// implementation. The pool lives inside the implementing type; callers
/// hold the backend behind an `Arc` and never touch connections directly.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Open the connection pool
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the `users` and `todos` tables if they do not exist yet.
    /// Safe to run any number of times.
    async fn migrate(&self) -> AppResult<()>;

    /// Release pooled connections
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// User resource operations. Each one is a single SQL statement.
#[async_trait]
pub trait UserBackend: Backend {
    /// Insert a user from name and email, returning the stored row
    async fn create_user(&self, user: &UserPayload) -> AppResult<User>;

    /// All users in insertion order
    async fn find_all_users(&self) -> AppResult<Vec<User>>;

    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Replace name and email; `None` when the id does not exist
    async fn update_user(&self, id: i32, user: &UserPayload) -> AppResult<Option<User>>;

    /// Returns whether a row was deleted. Owned todos go with it.
    async fn delete_user(&self, id: i32) -> AppResult<bool>;
}

/// Todo resource operations
#[async_trait]
pub trait TodoBackend: Backend {
    async fn create_todo(&self, todo: &TodoPayload) -> AppResult<Todo>;

    async fn find_all_todos(&self) -> AppResult<Vec<Todo>>;

    async fn find_todo_by_id(&self, id: i32) -> AppResult<Option<Todo>>;

    /// Replace title, description, completed and due date. The owner is kept.
    async fn update_todo(&self, id: i32, todo: &TodoPayload) -> AppResult<Option<Todo>>;

    async fn delete_todo(&self, id: i32) -> AppResult<bool>;
}

/// Combined backend interface handed to the router
pub trait DataBackend: UserBackend + TodoBackend {}

impl<T> DataBackend for T where T: UserBackend + TodoBackend {}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(config: &DatabaseBackendConfig) -> AppResult<Arc<dyn DataBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    async fn create_backend(
        config: &DatabaseBackendConfig,
    ) -> AppResult<Box<dyn DataBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend = database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend = database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}

use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Create the `users` and `todos` tables for SQLite
///
/// The foreign key on `todos.user_id` only cascades when the connection
/// has `PRAGMA foreign_keys` enabled, which the backend sets on connect.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let users_sql = r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) UNIQUE NOT NULL,
            age INTEGER,
            phone VARCHAR(15) UNIQUE,
            address TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    "#;

    sqlx::query(users_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create users table: {}", e)))?;

    let todos_sql = r#"
        CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
            title VARCHAR(200),
            description TEXT,
            completed BOOLEAN DEFAULT FALSE,
            due_date DATE,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
    "#;

    sqlx::query(todos_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create todos table: {}", e)))?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_user_id ON todos (user_id)")
        .execute(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create index: {}", e)))?;

    Ok(())
}

/// Drop both tables (for cleanup/testing)
pub async fn drop_schema(pool: &SqlitePool) -> AppResult<()> {
    for table in ["todos", "users"] {
        let sql = format!("DROP TABLE IF EXISTS {}", table);
        sqlx::query(&sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to drop table {}: {}", table, e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    async fn table_count(pool: &SqlitePool) -> i64 {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'todos')",
        )
        .fetch_one(pool)
        .await
        .unwrap();
        count.0
    }

    #[tokio::test]
    async fn test_schema_creation() {
        let pool = create_test_pool().await;

        init_schema(&pool).await.unwrap();
        assert_eq!(table_count(&pool).await, 2);

        drop_schema(&pool).await.unwrap();
        assert_eq!(table_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let pool = create_test_pool().await;

        init_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO users (name, email) VALUES ('Keep', 'keep@example.com')")
            .execute(&pool)
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }
}

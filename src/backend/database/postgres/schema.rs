use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Create the `users` and `todos` tables for PostgreSQL
///
/// Every statement is `IF NOT EXISTS`, so running this against an already
/// initialized database is a no-op.
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let users_sql = r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(100) UNIQUE NOT NULL,
            age INT,
            phone VARCHAR(15) UNIQUE,
            address TEXT,
            created_at TIMESTAMP DEFAULT NOW(),
            updated_at TIMESTAMP DEFAULT NOW()
        )
    "#;

    sqlx::query(users_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create users table: {}", e)))?;

    let todos_sql = r#"
        CREATE TABLE IF NOT EXISTS todos (
            id SERIAL PRIMARY KEY,
            user_id INT REFERENCES users(id) ON DELETE CASCADE,
            title VARCHAR(200),
            description TEXT,
            completed BOOLEAN DEFAULT FALSE,
            due_date DATE,
            created_at TIMESTAMP DEFAULT NOW(),
            updated_at TIMESTAMP DEFAULT NOW()
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
pub async fn drop_schema(pool: &PgPool) -> AppResult<()> {
    // todos first, it references users
    for table in ["todos", "users"] {
        let sql = format!("DROP TABLE IF EXISTS {} CASCADE", table);
        sqlx::query(&sql)
            .execute(pool)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to drop table {}: {}", table, e)))?;
    }

    Ok(())
}

use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{User, UserPayload};

/// SQLite statements for the `users` table
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user: &UserPayload) -> AppResult<User> {
        let created =
            sqlx::query_as::<_, User>("INSERT INTO users (name, email) VALUES (?, ?) RETURNING *")
                .bind(&user.name)
                .bind(&user.email)
                .fetch_one(&self.pool)
                .await?;

        Ok(created)
    }

    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    pub async fn update(&self, id: i32, user: &UserPayload) -> AppResult<Option<User>> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET name = ?, email = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? RETURNING *",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::database::sqlite::schema::init_schema;
    use crate::error::AppError;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_store() -> SqliteUserStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        SqliteUserStore::new(pool)
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let store = create_test_store().await;

        let user = store
            .insert(&UserPayload::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        assert!(user.id > 0);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.age.is_none());
        assert!(user.created_at.is_some());
        assert!(user.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_insert_duplicate_email_is_database_error() {
        let store = create_test_store().await;
        store
            .insert(&UserPayload::new("Alice", "same@example.com"))
            .await
            .unwrap();

        let result = store
            .insert(&UserPayload::new("Other", "same@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_missing_name_violates_not_null() {
        let store = create_test_store().await;
        let payload = UserPayload {
            name: None,
            email: Some("nameless@example.com".to_string()),
        };

        assert!(matches!(
            store.insert(&payload).await,
            Err(AppError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let store = create_test_store().await;
        for (name, email) in [("C", "c@example.com"), ("A", "a@example.com"), ("B", "b@example.com")] {
            store.insert(&UserPayload::new(name, email)).await.unwrap();
        }

        let names: Vec<String> = store
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_row() {
        let store = create_test_store().await;

        let updated = store
            .update(42, &UserPayload::new("Nobody", "nobody@example.com"))
            .await
            .unwrap();
        assert!(updated.is_none());
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_name_and_email() {
        let store = create_test_store().await;
        let created = store
            .insert(&UserPayload::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        let updated = store
            .update(created.id, &UserPayload::new("Alicia", "alicia@example.com"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alicia@example.com");
        assert_eq!(updated.created_at, created.created_at);
    }
}

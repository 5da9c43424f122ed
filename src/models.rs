use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A row of the `users` table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Body of `POST /data` and `PUT /data/{id}`
///
/// Both fields are optional at the JSON level; a missing value is bound as
/// NULL and rejected by the `NOT NULL` constraint, not by the handler.
/// Any other field in the body is ignored.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// A row of the `todos` table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Body of `POST /todos` and `PUT /todos/{id}`
///
/// `user_id` is only read on create; a todo keeps its owner for life.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct TodoPayload {
    pub user_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<NaiveDate>,
}

impl TodoPayload {
    pub fn completed_or_default(&self) -> bool {
        self.completed.unwrap_or(false)
    }
}

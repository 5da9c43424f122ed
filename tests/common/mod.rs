#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use user_data_server::backend::database::DatabaseBackendConfig;
use user_data_server::backend::{BackendFactory, DataBackend};
use user_data_server::startup::{build_router, initialize_schema};

/// Create a migrated backend over an in-memory SQLite database
pub async fn setup_test_database() -> Result<Arc<dyn DataBackend>, Box<dyn std::error::Error>> {
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory_sqlite()).await?;
    initialize_schema(backend.as_ref()).await?;
    Ok(backend)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TestDatabaseType {
    Sqlite,
    Postgres,
}

/// Holds whatever keeps a test database alive; the container stops on drop
pub struct TestDatabase {
    pub database_type: TestDatabaseType,
    pub postgres_container: Option<ContainerAsync<Postgres>>,
}

/// Create a migrated backend over a throwaway PostgreSQL container
pub async fn setup_postgres_test_database(
) -> Result<(Arc<dyn DataBackend>, ContainerAsync<Postgres>), Box<dyn std::error::Error>> {
    let container = Postgres::default().start().await?;

    let connection_string = format!(
        "postgresql://postgres:postgres@{}:{}/postgres",
        container.get_host().await?,
        container.get_host_port_ipv4(5432).await?
    );

    let config = DatabaseBackendConfig::postgres(connection_string).with_max_connections(5);
    let backend = BackendFactory::create(&config).await?;
    initialize_schema(backend.as_ref()).await?;

    Ok((backend, container))
}

/// Router and backend over the requested dialect
pub async fn setup_test_app_with_db(
    database_type: TestDatabaseType,
) -> Result<(Router, Arc<dyn DataBackend>, TestDatabase), Box<dyn std::error::Error>> {
    let (backend, postgres_container) = match database_type {
        TestDatabaseType::Sqlite => (setup_test_database().await?, None),
        TestDatabaseType::Postgres => {
            let (backend, container) = setup_postgres_test_database().await?;
            (backend, Some(container))
        }
    };

    let test_db = TestDatabase {
        database_type,
        postgres_container,
    };

    Ok((build_router(backend.clone()), backend, test_db))
}

/// Create the full application router over a fresh database
pub async fn setup_test_app() -> Result<Router, Box<dyn std::error::Error>> {
    let backend = setup_test_database().await?;
    Ok(build_router(backend))
}

/// Router plus the backend behind it, for tests that inspect storage directly
pub async fn setup_test_app_with_backend(
) -> Result<(Router, Arc<dyn DataBackend>), Box<dyn std::error::Error>> {
    let backend = setup_test_database().await?;
    Ok((build_router(backend.clone()), backend))
}

pub async fn setup_test_server() -> TestServer {
    let app = setup_test_app().await.unwrap();
    TestServer::new(app).unwrap()
}

pub fn create_test_user_json(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email
    })
}

/// POST a user and return the created record from the `data` field
pub async fn create_user(server: &TestServer, name: &str, email: &str) -> Value {
    let response = server
        .post("/data")
        .json(&create_test_user_json(name, email))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["data"].clone()
}

/// POST a todo owned by `user_id` and return the created record
pub async fn create_todo(server: &TestServer, user_id: i64, title: &str) -> Value {
    let response = server
        .post("/todos")
        .json(&json!({
            "user_id": user_id,
            "title": title
        }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["data"].clone()
}

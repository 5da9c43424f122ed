use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::{Backend, BackendFactory, DataBackend};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::logging::logging_middleware;
use crate::resource::{root, todo, user, AppState};

/// Open the connection pool described by the application config
pub async fn connect_backend(config: &AppConfig) -> AppResult<Arc<dyn DataBackend>> {
    let backend_config =
        DatabaseBackendConfig::from_app_config(config).map_err(AppError::Configuration)?;

    tracing::info!(
        database_type = ?backend_config.database_type,
        max_connections = backend_config.max_connections,
        "Connecting to database"
    );

    BackendFactory::create(&backend_config).await
}

/// Create the tables before the listener accepts any request
pub async fn initialize_schema(backend: &dyn DataBackend) -> AppResult<()> {
    backend.migrate().await?;
    tracing::info!("Database schema initialized");
    Ok(())
}

/// Build the full router over an already migrated backend
pub fn build_router(backend: AppState) -> Router {
    Router::new()
        .route("/", get(root::greeting))
        .route("/health", get(root::health))
        .route("/data", post(user::create_user).get(user::list_users))
        .route(
            "/data/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/todos", post(todo::create_todo).get(todo::list_todos))
        .route(
            "/todos/{id}",
            get(todo::get_todo)
                .put(todo::update_todo)
                .delete(todo::delete_todo),
        )
        .fallback(root::route_not_found)
        .method_not_allowed_fallback(root::route_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(backend)
}

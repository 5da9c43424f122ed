use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::AppState;
use crate::backend::UserBackend;
use crate::error::{AppError, AppResult};
use crate::extractors::{parse_id, JsonBody};
use crate::models::UserPayload;

const USER_NOT_FOUND: &str = "User not found";

fn not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

/// `POST /data`
pub async fn create_user(
    State(backend): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> AppResult<Json<Value>> {
    let created = backend.create_user(&payload).await?;

    Ok(Json(json!({
        "message": "Data received successfully",
        "data": created
    })))
}

/// `GET /data`
pub async fn list_users(State(backend): State<AppState>) -> AppResult<Json<Value>> {
    let users = backend.find_all_users().await?;
    Ok(Json(json!({ "users": users })))
}

/// `GET /data/{id}`
pub async fn get_user(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id, USER_NOT_FOUND)?;

    match backend.find_user_by_id(id).await? {
        Some(user) => Ok(Json(json!({ "user": user }))),
        None => Err(not_found()),
    }
}

/// `PUT /data/{id}`: replaces name and email
pub async fn update_user(
    State(backend): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id, USER_NOT_FOUND)?;

    match backend.update_user(id, &payload).await? {
        Some(user) => Ok(Json(json!({ "user": user }))),
        None => Err(not_found()),
    }
}

/// `DELETE /data/{id}`
pub async fn delete_user(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id, USER_NOT_FOUND)?;

    if !backend.delete_user(id).await? {
        return Err(not_found());
    }

    tracing::info!(user_id = id, "Deleted user");
    Ok(Json(json!({
        "message": "User deleted successfully",
        "user": null
    })))
}

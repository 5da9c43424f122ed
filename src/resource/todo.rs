use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use super::AppState;
use crate::backend::TodoBackend;
use crate::error::{AppError, AppResult};
use crate::extractors::{parse_id, JsonBody};
use crate::models::TodoPayload;

const TODO_NOT_FOUND: &str = "Todo not found";

fn not_found() -> AppError {
    AppError::NotFound(TODO_NOT_FOUND.to_string())
}

pub async fn create_todo(
    State(backend): State<AppState>,
    JsonBody(payload): JsonBody<TodoPayload>,
) -> AppResult<Json<Value>> {
    let created = backend.create_todo(&payload).await?;

    Ok(Json(json!({
        "message": "Todo created successfully",
        "data": created
    })))
}

pub async fn list_todos(State(backend): State<AppState>) -> AppResult<Json<Value>> {
    let todos = backend.find_all_todos().await?;
    Ok(Json(json!({ "todos": todos })))
}

pub async fn get_todo(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id, TODO_NOT_FOUND)?;

    backend
        .find_todo_by_id(id)
        .await?
        .map(|todo| Json(json!({ "todo": todo })))
        .ok_or_else(not_found)
}

pub async fn update_todo(
    State(backend): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TodoPayload>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id, TODO_NOT_FOUND)?;

    backend
        .update_todo(id, &payload)
        .await?
        .map(|todo| Json(json!({ "todo": todo })))
        .ok_or_else(not_found)
}

pub async fn delete_todo(
    State(backend): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_id(&id, TODO_NOT_FOUND)?;

    if !backend.delete_todo(id).await? {
        return Err(not_found());
    }

    Ok(Json(json!({
        "message": "Todo deleted successfully",
        "todo": null
    })))
}

//! REST endpoints for the todo API.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde_json::{Value, json};
use tracing::debug;

use crate::error::StoreError;

use super::model::UpdateFields;
use super::store::TodoStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TodoStore>,
}

/// Build the Axum router with the todo REST routes.
pub fn todo_routes(store: Arc<TodoStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", put(update_todo).delete(delete_todo))
        .route("/health", get(health))
        .with_state(state)
}

// ── Handlers ────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "jotter"
    }))
}

async fn list_todos(State(state): State<AppState>) -> impl IntoResponse {
    let todos = state.store.list().await;
    Json(todos)
}

async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(e) => {
            debug!(error = %e, "Rejected unparseable create request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid request body"})),
            );
        }
    };

    let title = match body.get("title").and_then(Value::as_str) {
        Some(t) => t,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Title is required"})),
            );
        }
    };

    // Absent or explicit-null description defaults to empty.
    let description = match body.get("description") {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Description must be a string"})),
            );
        }
    };

    match state.store.create(title, description).await {
        Ok(todo) => (StatusCode::CREATED, Json(json!(todo))),
        Err(e) => store_error_body(e),
    }
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let id = match id.parse::<u64>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid todo ID"})),
            );
        }
    };

    let body = match body {
        Ok(Json(body)) => body,
        Err(e) => {
            debug!(error = %e, "Rejected unparseable update request");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid request"})),
            );
        }
    };

    // Shape checks run before any field is applied; a rejected request
    // never half-updates an item.
    let mut fields = UpdateFields::default();

    if let Some(value) = body.get("title") {
        match value.as_str() {
            Some(t) => fields.title = Some(t.to_string()),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Title must be a non-empty string"})),
                );
            }
        }
    }

    if let Some(value) = body.get("description") {
        match value.as_str() {
            Some(d) => fields.description = Some(d.to_string()),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Description must be a string"})),
                );
            }
        }
    }

    if let Some(value) = body.get("completed") {
        match value.as_bool() {
            Some(c) => fields.completed = Some(c),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Completed must be a boolean"})),
                );
            }
        }
    }

    match state.store.update(id, fields).await {
        Ok(todo) => (StatusCode::OK, Json(json!(todo))),
        Err(e) => store_error_body(e),
    }
}

async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let id = match id.parse::<u64>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Invalid todo ID"})),
            );
        }
    };

    match state.store.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Todo deleted successfully"})),
        ),
        Err(e) => store_error_body(e),
    }
}

/// Map a store error onto the REST contract.
fn store_error_body(err: StoreError) -> (StatusCode, Json<Value>) {
    match err {
        StoreError::Validation { reason } => {
            (StatusCode::BAD_REQUEST, Json(json!({"error": reason})))
        }
        StoreError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Todo not found"})),
        ),
    }
}

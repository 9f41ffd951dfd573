//! Todo CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use pmcopilot_core::todo::{CreateTodoRequest, Todo, UpdateTodoRequest};

use crate::{handlers::AppError, state::AppState};

/// List all todos (GET /todos).
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todo_repo.list_todos().await?;
    Ok(Json(todos))
}

/// Create a new todo (POST /todos).
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(payload) = payload?;

    let id = state
        .todo_repo
        .create_todo(&payload.title, payload.completed)
        .await?;
    let todo = payload.into_todo(id);

    tracing::info!(todo_id = id, title = %todo.title, "Created new todo");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a single todo by ID (GET /todos/{id}).
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, AppError> {
    state
        .todo_repo
        .get_todo(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Todo", id))
}

/// Update a todo by ID (PUT /todos/{id}).
///
/// The id comes from the path. Unless strict updates are enabled, an
/// unknown id still answers 200 with the requested fields.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(payload) = payload?;
    let todo = payload.into_todo(id);

    match state.todo_repo.update_todo(&todo).await? {
        Some(stored) => {
            tracing::info!(todo_id = id, "Updated todo");
            Ok(Json(stored))
        }
        None if state.strict_updates => Err(AppError::not_found("Todo", id)),
        None => {
            tracing::warn!(todo_id = id, "Update matched no todo");
            Ok(Json(todo))
        }
    }
}

/// Delete a todo by ID (DELETE /todos/{id}).
///
/// Deleting an unknown id is not an error.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let removed = state.todo_repo.delete_todo(id).await?;

    tracing::info!(todo_id = id, removed, "Deleted todo");

    Ok(StatusCode::NO_CONTENT)
}

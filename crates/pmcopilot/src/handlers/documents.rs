//! PRD document CRUD handlers.
//!
//! Ids and timestamps are always generated here, never read from the
//! request body.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use pmcopilot_core::document::{CreateDocumentRequest, Document, UpdateDocumentRequest};

use crate::{handlers::AppError, state::AppState};

/// List all documents (GET /prds).
pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let documents = state.document_repo.list_documents().await?;
    Ok(Json(documents))
}

/// Create a new document (POST /prds).
pub async fn create_document(
    State(state): State<AppState>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    let Json(payload) = payload?;
    let document = payload.into_document();

    state.document_repo.create_document(&document).await?;

    tracing::info!(prd_id = %document.id, title = %document.title, "Created new PRD");

    Ok((StatusCode::CREATED, Json(document)))
}

/// Get a single document by ID (GET /prds/{id}).
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    state
        .document_repo
        .get_document(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("PRD", id))
}

/// Update a document by ID (PUT /prds/{id}).
///
/// `updatedAt` is reset to now on every call; `id` and `createdAt` are kept.
pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateDocumentRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload?;
    let now = Utc::now();

    let updated = state
        .document_repo
        .update_document(&id, &payload.title, &payload.content, now)
        .await?;

    match updated {
        Some(document) => {
            tracing::info!(prd_id = %id, "Updated PRD");
            Ok(Json(document).into_response())
        }
        None if state.strict_updates => Err(AppError::not_found("PRD", id)),
        None => {
            tracing::warn!(prd_id = %id, "Update matched no PRD");
            Ok(Json(payload.into_echo(id, now)).into_response())
        }
    }
}

/// Delete a document by ID (DELETE /prds/{id}).
///
/// Also removes the document's interactive session. Unknown ids are not an error.
pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state.document_repo.delete_document(&id).await?;

    tracing::info!(prd_id = %id, removed, "Deleted PRD");

    Ok(StatusCode::NO_CONTENT)
}

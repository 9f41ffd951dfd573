//! Interactive session handlers (GET/POST /prds/{id}/session).

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use pmcopilot_core::session::{SaveSessionRequest, SaveSessionResponse, Session};

use crate::{handlers::AppError, state::AppState};

/// Get the session for a PRD (GET /prds/{id}/session).
pub async fn get_session(
    State(state): State<AppState>,
    Path(prd_id): Path<String>,
) -> Result<Json<Session>, AppError> {
    state
        .session_repo
        .get_session(&prd_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Session", prd_id))
}

/// Save the session for a PRD (POST /prds/{id}/session).
///
/// Creates the session on first save and overwrites history and settings
/// afterwards. The new session id is only returned on creation.
pub async fn save_session(
    State(state): State<AppState>,
    Path(prd_id): Path<String>,
    payload: Result<Json<SaveSessionRequest>, JsonRejection>,
) -> Result<Json<SaveSessionResponse>, AppError> {
    let Json(payload) = payload?;
    let candidate = payload.into_session(&prd_id);

    let stored = state.session_repo.upsert_session(&candidate).await?;

    if stored.id == candidate.id {
        tracing::info!(prd_id = %prd_id, session_id = %stored.id, "Created session");
        Ok(Json(SaveSessionResponse::created(stored.id)))
    } else {
        tracing::info!(prd_id = %prd_id, session_id = %stored.id, "Updated session");
        Ok(Json(SaveSessionResponse::updated()))
    }
}

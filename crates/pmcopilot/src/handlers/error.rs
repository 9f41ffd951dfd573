use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pmcopilot_core::storage::{repository_error_to_status_code, RepositoryError};

/// Application error type that wraps `anyhow::Error`.
///
/// This allows using `?` on repository calls and body extraction results.
/// The response status is derived from the wrapped error:
///
/// - [`JsonRejection`] -> 400 with the decode error text
/// - [`RepositoryError`] -> [`repository_error_to_status_code`]; not-found
///   errors carry a fixed `"<entity> not found"` message
/// - anything else -> 500
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Not-found error for an entity, answered with a fixed message.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self(
            RepositoryError::NotFound {
                entity_type,
                id: id.to_string(),
            }
            .into(),
        )
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        if let Some(rejection) = self.0.downcast_ref::<JsonRejection>() {
            return (StatusCode::BAD_REQUEST, rejection.body_text());
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound { entity_type, .. }) => {
                (StatusCode::NOT_FOUND, format!("{entity_type} not found"))
            }
            Some(repo_error) => {
                let code = repository_error_to_status_code(repo_error);
                (
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    repo_error.to_string(),
                )
            }
            None => (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status, message = %message, "API error");
        }

        (status, message).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

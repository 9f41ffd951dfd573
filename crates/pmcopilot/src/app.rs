use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        documents::{
            create_document, delete_document, get_document, list_documents, update_document,
        },
        health::{healthz, livez},
        sessions::{get_session, save_session},
        todos::{create_todo, delete_todo, get_todo, list_todos, update_todo},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for browser frontends
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health probes
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        // Todo routes
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        // PRD routes
        .route("/prds", get(list_documents).post(create_document))
        .route(
            "/prds/{id}",
            get(get_document)
                .put(update_document)
                .delete(delete_document),
        )
        .route("/prds/{id}/session", get(get_session).post(save_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

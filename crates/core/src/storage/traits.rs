use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::document::Document;
use crate::session::Session;
use crate::todo::Todo;

use super::Result;

/// Repository for todo operations.
///
/// Every method maps to a single storage statement.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Lists all todos in storage order.
    async fn list_todos(&self) -> Result<Vec<Todo>>;

    /// Inserts a todo and returns the id assigned by the storage engine.
    async fn create_todo(&self, title: &str, completed: bool) -> Result<i64>;

    /// Gets a todo by its ID.
    async fn get_todo(&self, id: i64) -> Result<Option<Todo>>;

    /// Overwrites title and completed on the todo with `todo.id`.
    ///
    /// Returns the stored row after the update, or `None` when no row matched.
    async fn update_todo(&self, todo: &Todo) -> Result<Option<Todo>>;

    /// Deletes a todo. Returns whether a row was removed.
    async fn delete_todo(&self, id: i64) -> Result<bool>;
}

/// Repository for PRD document operations.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Lists all documents in storage order.
    async fn list_documents(&self) -> Result<Vec<Document>>;

    /// Inserts a fully-formed document (id and timestamps already generated).
    async fn create_document(&self, document: &Document) -> Result<()>;

    /// Gets a document by its ID.
    async fn get_document(&self, id: &str) -> Result<Option<Document>>;

    /// Overwrites title, content and `updated_at`, leaving id and `created_at` alone.
    ///
    /// Returns the stored row after the update, or `None` when no row matched.
    async fn update_document(
        &self,
        id: &str,
        title: &str,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Document>>;

    /// Deletes a document. Returns whether a row was removed.
    async fn delete_document(&self, id: &str) -> Result<bool>;
}

/// Repository for interactive PRD sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Gets the session belonging to a PRD.
    async fn get_session(&self, prd_id: &str) -> Result<Option<Session>>;

    /// Inserts `session`, or overwrites history, settings and `updated_at` of
    /// the existing session for the same PRD.
    ///
    /// Returns the stored session. Its id differs from `session.id` when an
    /// existing session was updated.
    async fn upsert_session(&self, session: &Session) -> Result<Session>;
}

/// Liveness check against the underlying store.
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<()>;
}

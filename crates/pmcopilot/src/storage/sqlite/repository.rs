//! SQLite repository implementation.
//!
//! Implements the repository traits from `pmcopilot_core::storage` using SQLite.
//! Each trait method runs exactly one statement on the shared connection.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use pmcopilot_core::document::Document;
use pmcopilot_core::session::Session;
use pmcopilot_core::storage::{
    DocumentRepository, HealthCheck, RepositoryError, Result, SessionRepository, TodoRepository,
};
use pmcopilot_core::todo::Todo;

use super::conversions::{
    format_datetime, history_to_json, row_to_document, row_to_session, row_to_todo,
    settings_to_json,
};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for all entity types. The single
/// connection serializes statements on its background thread, so the
/// repository can be shared across concurrent requests.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (creating if absent) a file-based database and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(format!("{path}: {e}")))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path, "SQLite storage initialized");

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// TodoRepository implementation
// ============================================================================

#[async_trait]
impl TodoRepository for SqliteRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_TODOS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_todo).map_err(wrap_err)?;

                let mut todos = Vec::new();
                for row_result in rows {
                    todos.push(row_result.map_err(wrap_err)?);
                }
                Ok(todos)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Todo"))
    }

    async fn create_todo(&self, title: &str, completed: bool) -> Result<i64> {
        let title = title.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_TODO, rusqlite::params![title, completed])
                    .map_err(wrap_err)?;
                Ok(conn.last_insert_rowid())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Todo"))
    }

    async fn get_todo(&self, id: i64) -> Result<Option<Todo>> {
        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_TODO_BY_ID, [id], row_to_todo)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Todo", id.to_string()))
    }

    async fn update_todo(&self, todo: &Todo) -> Result<Option<Todo>> {
        let id = todo.id;
        let title = todo.title.clone();
        let completed = todo.completed;

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::UPDATE_TODO,
                    rusqlite::params![id, title, completed],
                    row_to_todo,
                )
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Todo", id.to_string()))
    }

    async fn delete_todo(&self, id: i64) -> Result<bool> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_TODO, [id]).map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Todo", id.to_string()))
    }
}

// ============================================================================
// DocumentRepository implementation
// ============================================================================

#[async_trait]
impl DocumentRepository for SqliteRepository {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_DOCUMENTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_document).map_err(wrap_err)?;

                let mut documents = Vec::new();
                for row_result in rows {
                    documents.push(row_result.map_err(wrap_err)?);
                }
                Ok(documents)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Document"))
    }

    async fn create_document(&self, document: &Document) -> Result<()> {
        let id = document.id.clone();
        let title = document.title.clone();
        let content = document.content.clone();
        let created_at = format_datetime(&document.created_at);
        let updated_at = format_datetime(&document.updated_at);
        let document_id = document.id.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_DOCUMENT,
                    rusqlite::params![id, title, content, created_at, updated_at],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Document", document_id))
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_DOCUMENT_BY_ID, [&id_str], row_to_document)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Document", id))
    }

    async fn update_document(
        &self,
        id: &str,
        title: &str,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Document>> {
        let id_str = id.to_string();
        let title = title.to_string();
        let content = content.to_string();
        let updated_at = format_datetime(&updated_at);

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::UPDATE_DOCUMENT,
                    rusqlite::params![id_str, title, content, updated_at],
                    row_to_document,
                )
                .optional()
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Document", id))
    }

    async fn delete_document(&self, id: &str) -> Result<bool> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_DOCUMENT, [&id_str])
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Document", id))
    }
}

// ============================================================================
// SessionRepository implementation
// ============================================================================

#[async_trait]
impl SessionRepository for SqliteRepository {
    async fn get_session(&self, prd_id: &str) -> Result<Option<Session>> {
        let prd_id_str = prd_id.to_string();

        self.conn
            .call(move |conn| {
                conn.query_row(schema::SELECT_SESSION_BY_PRD, [&prd_id_str], row_to_session)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Session", prd_id))
    }

    async fn upsert_session(&self, session: &Session) -> Result<Session> {
        let id = session.id.clone();
        let prd_id = session.prd_id.clone();
        let history_json = history_to_json(&session.conversation_history)?;
        let settings_json = settings_to_json(&session.settings)?;
        let created_at = format_datetime(&session.created_at);
        let updated_at = format_datetime(&session.updated_at);

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::UPSERT_SESSION,
                    rusqlite::params![
                        id,
                        prd_id,
                        history_json,
                        settings_json,
                        created_at,
                        updated_at
                    ],
                    row_to_session,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Session", session.prd_id.as_str()))
    }
}

#[async_trait]
impl HealthCheck for SqliteRepository {
    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}

//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde_json::{Map, Value};

use pmcopilot_core::document::Document;
use pmcopilot_core::session::{ConversationMessage, Session};
use pmcopilot_core::storage::RepositoryError;
use pmcopilot_core::todo::Todo;

/// Convert a SQLite row to a Todo.
///
/// Expected columns: id, title, completed
pub fn row_to_todo(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        completed: row.get(2)?,
    })
}

/// Convert a SQLite row to a Document.
///
/// Expected columns: id, title, content, createdAt, updatedAt
pub fn row_to_document(row: &Row) -> rusqlite::Result<Document> {
    let created_at: String = row.get(3)?;
    let updated_at: String = row.get(4)?;

    Ok(Document {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Convert a SQLite row to a Session.
///
/// Expected columns: id, prd_id, conversation_history, settings, created_at, updated_at
pub fn row_to_session(row: &Row) -> rusqlite::Result<Session> {
    let history_json: String = row.get(2)?;
    let settings_json: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Session {
        id: row.get(0)?,
        prd_id: row.get(1)?,
        conversation_history: parse_json_column(&history_json)?,
        settings: parse_json_column(&settings_json)?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

/// Serialize a conversation history for storage.
pub fn history_to_json(history: &[ConversationMessage]) -> Result<String, RepositoryError> {
    serde_json::to_string(history).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Serialize session settings for storage.
pub fn settings_to_json(settings: &Map<String, Value>) -> Result<String, RepositoryError> {
    serde_json::to_string(settings).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Format a DateTime for SQLite storage (RFC 3339, full sub-second precision).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn parse_json_column<T: serde::de::DeserializeOwned>(json: &str) -> rusqlite::Result<T> {
    serde_json::from_str(json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

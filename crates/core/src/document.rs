//! Product-requirement documents (PRDs) and their API request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product-requirement document.
///
/// The id and both timestamps are generated server-side. `created_at` never
/// changes after creation; `updated_at` is reset on every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Creates a document with a fresh random id and `created_at == updated_at == now`.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets a specific ID (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

/// Request payload for creating a document (POST /prds).
///
/// `id`, `createdAt` and `updatedAt` may appear in the body but are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub content: String,
}

impl CreateDocumentRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn into_document(self) -> Document {
        Document::new(self.title, self.content)
    }
}

/// Request payload for updating a document (PUT /prds/{id}).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    pub title: String,
    pub content: String,
}

/// Body echoed back when an update matched no stored document.
///
/// There is no stored `createdAt` to report, so the field is absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentEcho {
    pub id: String,
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl UpdateDocumentRequest {
    pub fn into_echo(self, id: impl Into<String>, updated_at: DateTime<Utc>) -> DocumentEcho {
        DocumentEcho {
            id: id.into(),
            title: self.title,
            content: self.content,
            updated_at,
        }
    }
}

//! Interactive PRD sessions.
//!
//! A session stores the conversation history and settings of the interactive
//! PRD editor. There is at most one session per document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Who sent a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single message in a session's conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Input tokens used (assistant messages).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u64>,
    /// Output tokens generated (assistant messages).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<u64>,
    /// Generation time in seconds (assistant messages).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
}

impl ConversationMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::with_role(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::with_role(MessageRole::Assistant, content)
    }

    fn with_role(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
            input_tokens: None,
            output_tokens: None,
            total_time: None,
        }
    }
}

/// A saved interactive session for one PRD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub prd_id: String,
    pub conversation_history: Vec<ConversationMessage>,
    pub settings: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session with a fresh id, stamped with the current time.
    pub fn new(
        prd_id: impl Into<String>,
        conversation_history: Vec<ConversationMessage>,
        settings: Map<String, Value>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            prd_id: prd_id.into(),
            conversation_history,
            settings,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request payload for POST /prds/{prdId}/session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSessionRequest {
    pub conversation_history: Vec<ConversationMessage>,
    pub settings: Map<String, Value>,
}

impl SaveSessionRequest {
    pub fn into_session(self, prd_id: impl Into<String>) -> Session {
        Session::new(prd_id, self.conversation_history, self.settings)
    }
}

/// Response body for a session save.
///
/// `id` is only present when the save created a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveSessionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SaveSessionResponse {
    pub fn created(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
        }
    }

    pub fn updated() -> Self {
        Self {
            success: true,
            id: None,
        }
    }
}

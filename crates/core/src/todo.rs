//! Todo items and their API request types.

use serde::{Deserialize, Serialize};

/// A todo item. The id is assigned by the storage engine on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: i64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Request payload for creating a todo (POST /todos).
///
/// Any `id` in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl CreateTodoRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Builds the todo once the storage engine has assigned an id.
    pub fn into_todo(self, id: i64) -> Todo {
        Todo::new(id, self.title, self.completed)
    }
}

/// Request payload for replacing a todo's fields (PUT /todos/{id}).
///
/// The id always comes from the path, never from the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl UpdateTodoRequest {
    pub fn into_todo(self, id: i64) -> Todo {
        Todo::new(id, self.title, self.completed)
    }
}

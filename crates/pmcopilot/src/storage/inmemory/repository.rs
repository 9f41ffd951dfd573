//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use pmcopilot_core::document::Document;
use pmcopilot_core::session::Session;
use pmcopilot_core::storage::{
    DocumentRepository, HealthCheck, RepositoryError, Result, SessionRepository, TodoRepository,
};
use pmcopilot_core::todo::Todo;

#[derive(Debug, Default)]
struct TodoTable {
    /// Last id handed out; ids are never reused, matching AUTOINCREMENT.
    last_id: i64,
    rows: BTreeMap<i64, Todo>,
}

/// In-memory storage backend for testing.
///
/// Uses maps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    todos: Arc<RwLock<TodoTable>>,
    /// Documents in insertion order.
    documents: Arc<RwLock<Vec<Document>>>,
    /// Sessions keyed by PRD id.
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryRepository {
    async fn list_todos(&self) -> Result<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.rows.values().cloned().collect())
    }

    async fn create_todo(&self, title: &str, completed: bool) -> Result<i64> {
        let mut todos = self.todos.write().await;
        todos.last_id += 1;
        let id = todos.last_id;
        todos.rows.insert(id, Todo::new(id, title, completed));
        Ok(id)
    }

    async fn get_todo(&self, id: i64) -> Result<Option<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.rows.get(&id).cloned())
    }

    async fn update_todo(&self, todo: &Todo) -> Result<Option<Todo>> {
        let mut todos = self.todos.write().await;
        Ok(todos.rows.get_mut(&todo.id).map(|stored| {
            stored.title = todo.title.clone();
            stored.completed = todo.completed;
            stored.clone()
        }))
    }

    async fn delete_todo(&self, id: i64) -> Result<bool> {
        let mut todos = self.todos.write().await;
        Ok(todos.rows.remove(&id).is_some())
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn list_documents(&self) -> Result<Vec<Document>> {
        Ok(self.documents.read().await.clone())
    }

    async fn create_document(&self, document: &Document) -> Result<()> {
        let mut documents = self.documents.write().await;
        if documents.iter().any(|d| d.id == document.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Document",
                id: document.id.clone(),
            });
        }
        documents.push(document.clone());
        Ok(())
    }

    async fn get_document(&self, id: &str) -> Result<Option<Document>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id == id).cloned())
    }

    async fn update_document(
        &self,
        id: &str,
        title: &str,
        content: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Document>> {
        let mut documents = self.documents.write().await;
        Ok(documents.iter_mut().find(|d| d.id == id).map(|stored| {
            stored.title = title.to_string();
            stored.content = content.to_string();
            stored.updated_at = updated_at;
            stored.clone()
        }))
    }

    async fn delete_document(&self, id: &str) -> Result<bool> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id != id);
        let removed = documents.len() != before;

        if removed {
            self.sessions.write().await.remove(id);
        }
        Ok(removed)
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn get_session(&self, prd_id: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(prd_id).cloned())
    }

    async fn upsert_session(&self, session: &Session) -> Result<Session> {
        let documents = self.documents.read().await;
        if !documents.iter().any(|d| d.id == session.prd_id) {
            return Err(RepositoryError::InvalidData(format!(
                "Session {} references a missing record",
                session.prd_id
            )));
        }

        let mut sessions = self.sessions.write().await;
        let stored = sessions
            .entry(session.prd_id.clone())
            .and_modify(|existing| {
                existing.conversation_history = session.conversation_history.clone();
                existing.settings = session.settings.clone();
                existing.updated_at = session.updated_at;
            })
            .or_insert_with(|| session.clone());
        Ok(stored.clone())
    }
}

#[async_trait]
impl HealthCheck for InMemoryRepository {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_todo_ids_increase_and_are_not_reused() {
        let repo = InMemoryRepository::new();
        let a = repo.create_todo("a", false).await.unwrap();
        repo.delete_todo(a).await.unwrap();
        let b = repo.create_todo("b", false).await.unwrap();

        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[tokio::test]
    async fn test_update_missing_todo_is_none() {
        let repo = InMemoryRepository::new();
        let result = repo.update_todo(&Todo::new(5, "x", true)).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_documents_listed_in_insert_order() {
        let repo = InMemoryRepository::new();
        let first = Document::new("first", "");
        let second = Document::new("second", "");
        repo.create_document(&first).await.unwrap();
        repo.create_document(&second).await.unwrap();

        let listed = repo.list_documents().await.unwrap();

        assert_eq!(listed, vec![first, second]);
    }

    #[tokio::test]
    async fn test_session_requires_document_and_cascades() {
        let repo = InMemoryRepository::new();
        let orphan = Session::new("missing", vec![], Default::default());
        assert!(matches!(
            repo.upsert_session(&orphan).await,
            Err(RepositoryError::InvalidData(_))
        ));

        let doc = Document::new("PRD", "");
        repo.create_document(&doc).await.unwrap();
        repo.upsert_session(&Session::new(&doc.id, vec![], Default::default()))
            .await
            .unwrap();
        repo.delete_document(&doc.id).await.unwrap();

        assert_eq!(repo.get_session(&doc.id).await.unwrap(), None);
    }
}

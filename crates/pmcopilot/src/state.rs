//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects for storage
//! abstraction; the handlers never see a concrete backend.

use std::sync::Arc;

use pmcopilot_core::storage::{DocumentRepository, HealthCheck, SessionRepository, TodoRepository};

use crate::config::Config;
use crate::storage::SqliteRepository;

/// Shared application state.
///
/// Cloned for each request handler. All repository handles point at the
/// same process-wide store, created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub todo_repo: Arc<dyn TodoRepository>,
    pub document_repo: Arc<dyn DocumentRepository>,
    pub session_repo: Arc<dyn SessionRepository>,
    pub health: Arc<dyn HealthCheck>,
    /// Return 404 when an update matches no row.
    pub strict_updates: bool,
}

impl AppState {
    /// Creates AppState over a single backend implementing every repository trait.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: TodoRepository + DocumentRepository + SessionRepository + HealthCheck + 'static,
    {
        Self {
            todo_repo: repo.clone(),
            document_repo: repo.clone(),
            session_repo: repo.clone(),
            health: repo,
            strict_updates: false,
        }
    }

    /// Creates AppState with SQLite storage at `config.sqlite_path`.
    ///
    /// Fails if the database cannot be opened or the schema cannot be created.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);

        Ok(Self::from_repository(sqlite_repo).with_strict_updates(config.strict_updates))
    }

    pub fn with_strict_updates(mut self, strict_updates: bool) -> Self {
        self.strict_updates = strict_updates;
        self
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================

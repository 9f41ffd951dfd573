//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL batch run on every startup. Safe to re-run against an existing file.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Todos table
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0
);

-- Product-requirement documents table
CREATE TABLE IF NOT EXISTS prds (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    createdAt TEXT NOT NULL,
    updatedAt TEXT NOT NULL
);

-- Interactive sessions table (one per PRD)
CREATE TABLE IF NOT EXISTS interactive_sessions (
    id TEXT PRIMARY KEY,
    prd_id TEXT NOT NULL UNIQUE,
    conversation_history TEXT NOT NULL,
    settings TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (prd_id) REFERENCES prds(id) ON DELETE CASCADE
);
"#;

pub const PING: &str = "SELECT 1";

// Todo queries
pub const SELECT_TODOS: &str = r#"
SELECT id, title, completed
FROM todos
ORDER BY id
"#;

pub const INSERT_TODO: &str = r#"
INSERT INTO todos (title, completed)
VALUES (?1, ?2)
"#;

pub const SELECT_TODO_BY_ID: &str = r#"
SELECT id, title, completed
FROM todos
WHERE id = ?1
"#;

pub const UPDATE_TODO: &str = r#"
UPDATE todos
SET title = ?2, completed = ?3
WHERE id = ?1
RETURNING id, title, completed
"#;

pub const DELETE_TODO: &str = r#"
DELETE FROM todos
WHERE id = ?1
"#;

// Document queries
pub const SELECT_DOCUMENTS: &str = r#"
SELECT id, title, content, createdAt, updatedAt
FROM prds
ORDER BY rowid
"#;

pub const INSERT_DOCUMENT: &str = r#"
INSERT INTO prds (id, title, content, createdAt, updatedAt)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_DOCUMENT_BY_ID: &str = r#"
SELECT id, title, content, createdAt, updatedAt
FROM prds
WHERE id = ?1
"#;

pub const UPDATE_DOCUMENT: &str = r#"
UPDATE prds
SET title = ?2, content = ?3, updatedAt = ?4
WHERE id = ?1
RETURNING id, title, content, createdAt, updatedAt
"#;

pub const DELETE_DOCUMENT: &str = r#"
DELETE FROM prds
WHERE id = ?1
"#;

// Session queries
pub const SELECT_SESSION_BY_PRD: &str = r#"
SELECT id, prd_id, conversation_history, settings, created_at, updated_at
FROM interactive_sessions
WHERE prd_id = ?1
"#;

pub const UPSERT_SESSION: &str = r#"
INSERT INTO interactive_sessions (id, prd_id, conversation_history, settings, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
ON CONFLICT (prd_id) DO UPDATE
SET conversation_history = excluded.conversation_history,
    settings = excluded.settings,
    updated_at = excluded.updated_at
RETURNING id, prd_id, conversation_history, settings, created_at, updated_at
"#;

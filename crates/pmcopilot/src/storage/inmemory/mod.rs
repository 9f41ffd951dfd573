//! In-memory storage backend implementation.
//!
//! Mirrors the SQLite backend's observable behavior (auto-increment todo ids,
//! one session per PRD, cascade on PRD delete) without touching disk.

mod repository;

pub use repository::InMemoryRepository;

//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `pmcopilot_core::storage`.
//!
//! - `sqlite`: the production backend, built on `rusqlite` and `tokio-rusqlite`.
//! - `inmemory` (tests only): `HashMap`-backed stand-in used to exercise the
//!   handlers without a database file.

pub mod sqlite;

#[cfg(test)]
pub mod inmemory;

pub use sqlite::SqliteRepository;

#[cfg(test)]
pub use inmemory::InMemoryRepository;

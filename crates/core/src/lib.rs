//! Functional core for the pmcopilot backend.
//!
//! Pure data types for todos, PRD documents and interactive sessions, plus
//! the repository contracts and error model the server crate builds on.
//! Nothing in this crate performs I/O.

pub mod document;
pub mod session;
pub mod storage;
pub mod todo;

pub mod documents;
pub mod error;
pub mod health;
pub mod sessions;
pub mod todos;

pub use error::AppError;

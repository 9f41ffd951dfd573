mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{DocumentRepository, HealthCheck, SessionRepository, TodoRepository};

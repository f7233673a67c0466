use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
pub enum TodoError {
    /// The only user-facing error; the message is displayed verbatim
    /// under the login form.
    #[error("Invalid email or password.")]
    InvalidCredentials,
    #[error("No active session")]
    SessionRequired,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Task cannot be empty")]
    EmptyTask,
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::api::forms::{LoginForm, SignUpForm, TaskForm};
pub use crate::core::errors::TodoError;
pub use crate::core::models::{DueDateTime, Priority, Session, TaskRecord, UserRecord};
pub use crate::core::services::TodoService;
pub use crate::infrastructure::logging::in_memory::InMemoryActivityLog;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;
pub use crate::infrastructure::storage::json_file::JsonFileStorage;

#[cfg(test)]
mod tests;

use crate::core::errors::TodoError;
use crate::core::models::{task::TaskRecord, user::UserRecord};
use async_trait::async_trait;

/// Key-value persistence for the two stored entries: the credential
/// record under `user` and the task list under `todos`. Reads make no
/// distinction between unavailable storage and no data yet; both come
/// back absent/empty.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Unconditionally overwrites the stored credential record.
    async fn save_user(&self, user: UserRecord) -> Result<(), TodoError>;
    async fn get_user(&self) -> Result<Option<UserRecord>, TodoError>;
    /// Rewrites the whole task list.
    async fn save_tasks(&self, tasks: &[TaskRecord]) -> Result<(), TodoError>;
    async fn get_tasks(&self) -> Result<Vec<TaskRecord>, TodoError>;
    /// Removes the task list entry, leaving the credential record alone.
    async fn clear_tasks(&self) -> Result<(), TodoError>;
}

pub mod in_memory;
pub mod json_file;

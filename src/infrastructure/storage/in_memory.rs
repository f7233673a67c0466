use crate::core::errors::TodoError;
use crate::core::models::{task::TaskRecord, user::UserRecord};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryStorage {
    user: Mutex<Option<UserRecord>>,
    tasks: Mutex<Vec<TaskRecord>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            user: Mutex::new(None),
            tasks: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_user(&self, user: UserRecord) -> Result<(), TodoError> {
        *self.user.lock().await = Some(user);
        Ok(())
    }

    async fn get_user(&self) -> Result<Option<UserRecord>, TodoError> {
        Ok(self.user.lock().await.clone())
    }

    async fn save_tasks(&self, tasks: &[TaskRecord]) -> Result<(), TodoError> {
        *self.tasks.lock().await = tasks.to_vec();
        Ok(())
    }

    async fn get_tasks(&self) -> Result<Vec<TaskRecord>, TodoError> {
        Ok(self.tasks.lock().await.clone())
    }

    async fn clear_tasks(&self) -> Result<(), TodoError> {
        self.tasks.lock().await.clear();
        Ok(())
    }
}

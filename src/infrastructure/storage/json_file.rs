use crate::config::CONFIG;
use crate::constants::{TODOS_KEY, USER_KEY};
use crate::core::errors::TodoError;
use crate::core::models::{task::TaskRecord, user::UserRecord};
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// File-backed key-value storage. Each entry lives in its own JSON file
/// under the data directory, mirroring the two-entry layout of the
/// browser storage this replaces.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStorage { dir: dir.into() }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.data_dir.clone())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    async fn write_entry<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), TodoError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            TodoError::StorageError(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;
        let body = serde_json::to_string_pretty(value)
            .map_err(|e| TodoError::StorageError(format!("Failed to encode `{}`: {}", key, e)))?;
        fs::write(self.entry_path(key), body)
            .await
            .map_err(|e| TodoError::StorageError(format!("Failed to write `{}`: {}", key, e)))
    }

    async fn read_entry<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let data = fs::read_to_string(self.entry_path(key)).await.ok()?;
        match serde_json::from_str(&data) {
            Ok(value) => Some(value),
            Err(err) => {
                // Malformed entries read as absent.
                warn!("Ignoring malformed `{}` entry: {}", key, err);
                None
            }
        }
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn save_user(&self, user: UserRecord) -> Result<(), TodoError> {
        self.write_entry(USER_KEY, &user).await
    }

    async fn get_user(&self) -> Result<Option<UserRecord>, TodoError> {
        Ok(self.read_entry(USER_KEY).await)
    }

    async fn save_tasks(&self, tasks: &[TaskRecord]) -> Result<(), TodoError> {
        self.write_entry(TODOS_KEY, tasks).await
    }

    async fn get_tasks(&self) -> Result<Vec<TaskRecord>, TodoError> {
        Ok(self.read_entry(TODOS_KEY).await.unwrap_or_default())
    }

    async fn clear_tasks(&self) -> Result<(), TodoError> {
        match fs::remove_file(self.entry_path(TODOS_KEY)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TodoError::StorageError(format!(
                "Failed to remove `{}`: {}",
                TODOS_KEY, e
            ))),
        }
    }
}

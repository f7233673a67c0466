use crate::core::errors::TodoError;
use crate::core::models::activity::ActivityEntry;
use crate::infrastructure::logging::ActivityLogger;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryActivityLog {
    entries: Arc<RwLock<Vec<ActivityEntry>>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        InMemoryActivityLog {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ActivityLogger for InMemoryActivityLog {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        actor_email: Option<&str>,
    ) -> Result<(), TodoError> {
        let mut entries = self.entries.write().await;
        entries.push(ActivityEntry {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            actor_email: actor_email.map(String::from),
            details,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn entries(&self) -> Result<Vec<ActivityEntry>, TodoError> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }
}

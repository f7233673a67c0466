pub mod in_memory;

use crate::core::errors::TodoError;
use crate::core::models::activity::ActivityEntry;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityLogger: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        actor_email: Option<&str>,
    ) -> Result<(), TodoError>;
    async fn entries(&self) -> Result<Vec<ActivityEntry>, TodoError>;
}

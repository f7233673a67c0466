use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the activity log.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    pub action: String,
    pub actor_email: Option<String>,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

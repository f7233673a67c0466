use crate::core::models::user::UserRecord;
use chrono::{DateTime, Utc};

/// Proof of a successful sign-up or login. Held by the service and
/// required by every task-list operation.
#[derive(Clone, Debug)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn for_user(user: &UserRecord) -> Self {
        Session {
            name: user.name.clone(),
            email: user.email.clone(),
            started_at: Utc::now(),
        }
    }
}

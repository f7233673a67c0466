use serde::{Deserialize, Serialize};

/// The single stored account. At most one record exists at a time;
/// signing up overwrites it unconditionally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    /// bcrypt hash of the password chosen at sign-up.
    pub password: String,
}

pub mod activity;
pub mod session;
pub mod task;
pub mod user;

pub use activity::ActivityEntry;
pub use session::Session;
pub use task::{DueDateTime, Priority, TaskRecord};
pub use user::UserRecord;

/// Storage entry holding the credential record.
pub const USER_KEY: &str = "user";
/// Storage entry holding the task list.
pub const TODOS_KEY: &str = "todos";
/// Display value for tasks without a due date.
pub const NO_DUE_DATE: &str = "No Due Date";

// Activity log action names.
pub const USER_SIGNED_UP: &str = "user_signed_up";
pub const USER_LOGGED_IN: &str = "user_logged_in";
pub const USER_LOGGED_OUT: &str = "user_logged_out";
pub const TASK_ADDED: &str = "task_added";
pub const TASK_TOGGLED: &str = "task_toggled";
pub const TASK_EDITED: &str = "task_edited";
pub const TASK_DELETED: &str = "task_deleted";

mod task_tests;

use crate::core::services::TodoService;
use crate::infrastructure::logging::in_memory::InMemoryActivityLog;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> TodoService<InMemoryActivityLog, InMemoryStorage> {
    let storage = InMemoryStorage::new();
    let logging = InMemoryActivityLog::new();
    TodoService::new(storage, logging)
}

use crate::core::errors::TodoError;
use crate::core::models::task::{DueDateTime, Priority};
use crate::tests::create_test_service;

#[tokio::test]
async fn test_add_appends_record_with_completed_false() {
    let _ = env_logger::try_init();
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();

    let record = service
        .add_task("Buy milk", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    assert_eq!(record.task, "Buy milk");
    assert_eq!(record.priority, Priority::Low);
    assert_eq!(record.due_date_time.as_str(), "No Due Date");
    assert!(!record.completed);

    let second = service
        .add_task("Walk dog", Priority::High, DueDateTime::new("2026-01-15"))
        .await
        .unwrap();

    let tasks = service.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0], record);
    assert_eq!(tasks[1], second);
}

#[tokio::test]
async fn test_task_ids_are_monotonic_and_never_reused() {
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();

    let a = service
        .add_task("a", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    let b = service
        .add_task("b", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    let c = service
        .add_task("c", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    assert!(a.id < b.id && b.id < c.id);

    // Deleting the newest record must not free its id for the next add.
    assert!(service.delete_task(c.id).await.unwrap());
    let d = service
        .add_task("d", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    assert!(d.id > c.id);
}

#[tokio::test]
async fn test_toggle_flips_only_the_completed_field() {
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();

    for text in ["first", "second", "third"] {
        service
            .add_task(text, Priority::Medium, DueDateTime::new("2026-02-01"))
            .await
            .unwrap();
    }
    let before = service.list_tasks().await.unwrap();

    let toggled = service
        .toggle_complete(before[1].id)
        .await
        .unwrap()
        .unwrap();
    assert!(toggled.completed);

    let after = service.list_tasks().await.unwrap();
    assert_eq!(after.len(), 3);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].id, before[1].id);
    assert_eq!(after[1].task, before[1].task);
    assert_eq!(after[1].priority, before[1].priority);
    assert_eq!(after[1].due_date_time, before[1].due_date_time);
    assert!(after[1].completed);

    // Toggling again flips it back.
    let toggled = service
        .toggle_complete(before[1].id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.completed);
}

#[tokio::test]
async fn test_toggle_unknown_id_is_a_noop() {
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();
    service
        .add_task("Buy milk", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    let before = service.list_tasks().await.unwrap();

    assert!(service.toggle_complete(999).await.unwrap().is_none());
    assert_eq!(service.list_tasks().await.unwrap(), before);
}

#[tokio::test]
async fn test_edit_preserves_id_and_completed() {
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();

    let record = service
        .add_task("Buy milk", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    service.toggle_complete(record.id).await.unwrap();

    let updated = service
        .edit_task(
            record.id,
            "Buy oat milk",
            Priority::High,
            DueDateTime::new("2026-03-01 09:30"),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, record.id);
    assert_eq!(updated.task, "Buy oat milk");
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.due_date_time.as_str(), "2026-03-01 09:30");
    assert!(updated.completed);

    let tasks = service.list_tasks().await.unwrap();
    assert_eq!(tasks, vec![updated]);
}

#[tokio::test]
async fn test_edit_unknown_id_is_a_noop() {
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();
    service
        .add_task("Buy milk", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    let before = service.list_tasks().await.unwrap();

    let result = service
        .edit_task(999, "nope", Priority::High, DueDateTime::none())
        .await
        .unwrap();
    assert!(result.is_none());
    assert_eq!(service.list_tasks().await.unwrap(), before);
}

#[tokio::test]
async fn test_delete_removes_only_the_matching_record() {
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();

    let first = service
        .add_task("first", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    let second = service
        .add_task("second", Priority::Low, DueDateTime::none())
        .await
        .unwrap();

    assert!(service.delete_task(first.id).await.unwrap());
    assert_eq!(service.list_tasks().await.unwrap(), vec![second]);

    // Already gone; no-op.
    assert!(!service.delete_task(first.id).await.unwrap());
}

#[tokio::test]
async fn test_task_operations_require_a_session() {
    let service = create_test_service();

    let result = service
        .add_task("Buy milk", Priority::Low, DueDateTime::none())
        .await;
    assert!(matches!(result, Err(TodoError::SessionRequired)));
    assert!(matches!(
        service.toggle_complete(1).await,
        Err(TodoError::SessionRequired)
    ));
    assert!(matches!(
        service
            .edit_task(1, "x", Priority::Low, DueDateTime::none())
            .await,
        Err(TodoError::SessionRequired)
    ));
    assert!(matches!(
        service.delete_task(1).await,
        Err(TodoError::SessionRequired)
    ));
    assert!(matches!(
        service.list_tasks().await,
        Err(TodoError::SessionRequired)
    ));
}

#[tokio::test]
async fn test_task_text_is_trimmed_and_required() {
    let service = create_test_service();
    service
        .sign_up("Ada", "ada@example.com", "hunter2")
        .await
        .unwrap();

    let result = service
        .add_task("   ", Priority::Low, DueDateTime::none())
        .await;
    assert!(matches!(result, Err(TodoError::EmptyTask)));

    let record = service
        .add_task("  Buy milk  ", Priority::Low, DueDateTime::none())
        .await
        .unwrap();
    assert_eq!(record.task, "Buy milk");

    let result = service
        .edit_task(record.id, "", Priority::Low, DueDateTime::none())
        .await;
    assert!(matches!(result, Err(TodoError::EmptyTask)));
}

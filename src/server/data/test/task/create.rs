use super::*;

/// Tests creating a task.
///
/// Verifies that a new task starts pending with zero actual hours and keeps
/// the requested fields.
///
/// Expected: Ok with status Pending and actual_hours 0
#[tokio::test]
async fn creates_pending_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TaskRepository::new(db);
    let task = repo
        .create(CreateTaskParams {
            user_id: user.id,
            title: "Linear algebra".to_string(),
            category: "math".to_string(),
            planned_hours: 2.5,
            task_date: date(2026, 3, 14),
        })
        .await?;

    assert_eq!(task.user_id, user.id);
    assert_eq!(task.title, "Linear algebra");
    assert_eq!(task.category, "math");
    assert_eq!(task.planned_hours, 2.5);
    assert_eq!(task.actual_hours, 0.0);
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.task_date, date(2026, 3, 14));
    assert_eq!(task.created_at, task.updated_at);

    Ok(())
}

/// Tests creating a task for a user that does not exist.
///
/// Verifies that the foreign key on user_id is enforced.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let result = repo
        .create(CreateTaskParams {
            user_id: 42,
            title: "Orphan".to_string(),
            category: "misc".to_string(),
            planned_hours: 1.0,
            task_date: date(2026, 3, 14),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests updating only the actual hours and status of a task.
///
/// Verifies that fields absent from the patch keep their stored values and
/// that updated_at moves forward.
///
/// Expected: Ok(Some) with title, category, planned hours and date unchanged
#[tokio::test]
async fn leaves_omitted_fields_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let task = factory::task::TaskFactory::new(db, user.id)
        .title("Essay draft")
        .category("writing")
        .planned_hours(3.0)
        .task_date(date(2026, 3, 14))
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let updated = repo
        .update(
            user.id,
            task.id,
            TaskPatch {
                actual_hours: Some(2.0),
                status: Some(TaskStatus::Partial),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Essay draft");
    assert_eq!(updated.category, "writing");
    assert_eq!(updated.planned_hours, 3.0);
    assert_eq!(updated.task_date, date(2026, 3, 14));
    assert_eq!(updated.actual_hours, 2.0);
    assert_eq!(updated.status, TaskStatus::Partial);
    assert_eq!(updated.created_at, task.created_at);
    assert!(updated.updated_at >= task.updated_at);

    Ok(())
}

/// Tests updating every mutable field at once.
///
/// Expected: Ok(Some) with all fields replaced
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let task = factory::create_task(db, user.id).await?;

    let repo = TaskRepository::new(db);
    let updated = repo
        .update(
            user.id,
            task.id,
            TaskPatch {
                title: Some("Renamed".to_string()),
                category: Some("physics".to_string()),
                planned_hours: Some(4.0),
                actual_hours: Some(4.5),
                status: Some(TaskStatus::Completed),
                task_date: Some(date(2026, 4, 1)),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.category, "physics");
    assert_eq!(updated.planned_hours, 4.0);
    assert_eq!(updated.actual_hours, 4.5);
    assert_eq!(updated.status, TaskStatus::Completed);
    assert_eq!(updated.task_date, date(2026, 4, 1));

    Ok(())
}

/// Tests that a task owned by another user cannot be updated.
///
/// Verifies that the lookup is scoped by owner and the other user's row is
/// left untouched.
///
/// Expected: Ok(None) and the stored task unchanged
#[tokio::test]
async fn returns_none_for_other_users_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ((owner, _), (_, other_task)) = factory::helpers::create_two_users_with_tasks(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo
        .update(
            owner.id,
            other_task.id,
            TaskPatch {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let stored = entity::prelude::Task::find_by_id(other_task.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, other_task.title);

    Ok(())
}

/// Tests updating a task id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo.update(user.id, 999, TaskPatch::default()).await?;

    assert!(result.is_none());

    Ok(())
}

use super::*;

/// Tests listing tasks for a single day.
///
/// Verifies that only the requested day's tasks are returned, newest first.
///
/// Expected: Ok with two tasks in reverse creation order
#[tokio::test]
async fn returns_tasks_for_date_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::task::TaskFactory::new(db, user.id)
        .task_date(date(2026, 3, 14))
        .build()
        .await?;
    let second = factory::task::TaskFactory::new(db, user.id)
        .task_date(date(2026, 3, 14))
        .build()
        .await?;
    factory::task::TaskFactory::new(db, user.id)
        .task_date(date(2026, 3, 15))
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_by_date(user.id, date(2026, 3, 14)).await?;

    let ids: Vec<i32> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests that another user's tasks are never listed.
///
/// Expected: Ok with only the requesting user's task
#[tokio::test]
async fn excludes_other_users_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ((owner, owner_task), _) = factory::helpers::create_two_users_with_tasks(db).await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_by_date(owner.id, owner_task.task_date).await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, owner_task.id);

    Ok(())
}

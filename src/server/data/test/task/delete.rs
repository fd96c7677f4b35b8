use super::*;

/// Tests deleting an owned task.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn deletes_owned_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let task = factory::create_task(db, user.id).await?;

    let repo = TaskRepository::new(db);
    let deleted = repo.delete(user.id, task.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Task::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting another user's task.
///
/// Verifies that deletion is scoped by owner so the row survives.
///
/// Expected: Ok(false) with both tasks still stored
#[tokio::test]
async fn does_not_delete_other_users_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ((owner, _), (_, other_task)) = factory::helpers::create_two_users_with_tasks(db).await?;

    let repo = TaskRepository::new(db);
    let deleted = repo.delete(owner.id, other_task.id).await?;

    assert!(!deleted);
    assert_eq!(entity::prelude::Task::find().count(db).await?, 2);

    Ok(())
}

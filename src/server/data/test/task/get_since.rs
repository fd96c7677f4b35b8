use super::*;

/// Tests fetching tasks from a start date onward.
///
/// Verifies the start date itself is included and earlier days are not.
///
/// Expected: Ok with tasks dated on or after the start
#[tokio::test]
async fn includes_start_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for day in [9, 10, 12] {
        factory::task::TaskFactory::new(db, user.id)
            .task_date(date(2026, 3, day))
            .build()
            .await?;
    }

    let repo = TaskRepository::new(db);
    let tasks = repo.get_since(user.id, date(2026, 3, 10)).await?;

    let dates: Vec<NaiveDate> = tasks.iter().map(|t| t.task_date).collect();
    assert_eq!(dates, vec![date(2026, 3, 10), date(2026, 3, 12)]);

    Ok(())
}

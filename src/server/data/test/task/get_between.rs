use super::*;

/// Tests fetching tasks inside an inclusive date range.
///
/// Verifies both bounds are included and dates outside the month are not.
///
/// Expected: Ok with the first and last day of the month only
#[tokio::test]
async fn includes_both_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for task_date in [
        date(2026, 1, 31),
        date(2026, 2, 1),
        date(2026, 2, 28),
        date(2026, 3, 1),
    ] {
        factory::task::TaskFactory::new(db, user.id)
            .task_date(task_date)
            .build()
            .await?;
    }

    let repo = TaskRepository::new(db);
    let tasks = repo
        .get_between(user.id, date(2026, 2, 1), date(2026, 2, 28))
        .await?;

    let dates: Vec<NaiveDate> = tasks.iter().map(|t| t.task_date).collect();
    assert_eq!(dates, vec![date(2026, 2, 1), date(2026, 2, 28)]);

    Ok(())
}

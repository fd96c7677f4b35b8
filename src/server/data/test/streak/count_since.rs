use super::*;

/// Tests counting rows inside a trailing window.
///
/// Verifies the start date is included and other users' rows are ignored.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_rows_on_or_after_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let today = date(2026, 3, 14);
    factory::helpers::create_streak_days(db, user.id, today, &[0, 30, 31]).await?;
    factory::helpers::create_streak_days(db, other.id, today, &[0]).await?;

    let repo = StreakRepository::new(db);
    let count = repo.count_since(user.id, date(2026, 2, 12)).await?;

    assert_eq!(count, 2);

    Ok(())
}

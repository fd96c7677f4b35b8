use super::*;

/// Tests that history comes back most recent first.
///
/// Expected: Ok with dates in descending order
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::helpers::create_streak_days(db, user.id, date(2026, 3, 14), &[3, 0, 1]).await?;

    let repo = StreakRepository::new(db);
    let days = repo.get_recent(user.id, 100).await?;

    let dates: Vec<NaiveDate> = days.iter().map(|d| d.streak_date).collect();
    assert_eq!(
        dates,
        vec![date(2026, 3, 14), date(2026, 3, 13), date(2026, 3, 11)]
    );

    Ok(())
}

/// Tests that the limit keeps only the most recent rows.
///
/// Expected: Ok with the two newest days
#[tokio::test]
async fn applies_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::helpers::create_streak_days(db, user.id, date(2026, 3, 14), &[0, 1, 2, 3]).await?;

    let repo = StreakRepository::new(db);
    let days = repo.get_recent(user.id, 2).await?;

    assert_eq!(days.len(), 2);
    assert_eq!(days[0].streak_date, date(2026, 3, 14));
    assert_eq!(days[1].streak_date, date(2026, 3, 13));

    Ok(())
}

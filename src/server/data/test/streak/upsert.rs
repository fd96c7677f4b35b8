use super::*;

/// Tests recording a day for the first time.
///
/// Expected: Ok with the stored totals
#[tokio::test]
async fn inserts_new_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = StreakRepository::new(db);
    let day = repo
        .upsert(UpsertStreakParams {
            user_id: user.id,
            streak_date: date(2026, 3, 14),
            hours_completed: 3.5,
            tasks_completed: 2,
        })
        .await?;

    assert_eq!(day.streak_date, date(2026, 3, 14));
    assert_eq!(day.hours_completed, 3.5);
    assert_eq!(day.tasks_completed, 2);

    Ok(())
}

/// Tests recording the same day twice.
///
/// Verifies that the second write replaces the totals instead of adding a
/// second row for the date.
///
/// Expected: Ok with one row holding the latest values
#[tokio::test]
async fn second_write_replaces_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = StreakRepository::new(db);
    for (hours, tasks) in [(1.0, 1), (4.0, 3)] {
        repo.upsert(UpsertStreakParams {
            user_id: user.id,
            streak_date: date(2026, 3, 14),
            hours_completed: hours,
            tasks_completed: tasks,
        })
        .await?;
    }

    let rows = entity::prelude::Streak::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].hours_completed, 4.0);
    assert_eq!(rows[0].tasks_completed, 3);

    Ok(())
}

/// Tests that the same date is tracked separately per user.
///
/// Expected: Ok with one row per user
#[tokio::test]
async fn keeps_users_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = StreakRepository::new(db);
    for user_id in [first.id, second.id] {
        repo.upsert(UpsertStreakParams {
            user_id,
            streak_date: date(2026, 3, 14),
            hours_completed: 1.0,
            tasks_completed: 1,
        })
        .await?;
    }

    assert_eq!(entity::prelude::Streak::find().count(db).await?, 2);

    Ok(())
}

//! Shared helper utilities for factory methods.

use chrono::{Days, NaiveDate};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns the date `days` calendar days before `date`.
///
/// # Panics
/// Panics if the subtraction leaves chrono's supported date range.
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .expect("date out of range")
}

/// Creates one streak row per offset, counted back from `today`.
///
/// Each row records one hour and one completed task.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the streak rows
/// - `today` - Reference date
/// - `offsets` - Day offsets before `today` (0 is today itself)
pub async fn create_streak_days(
    db: &DatabaseConnection,
    user_id: i32,
    today: NaiveDate,
    offsets: &[u64],
) -> Result<Vec<entity::streak::Model>, DbErr> {
    let mut rows = Vec::with_capacity(offsets.len());
    for offset in offsets {
        let row = crate::factory::streak::StreakFactory::new(db, user_id)
            .streak_date(days_before(today, *offset))
            .build()
            .await?;
        rows.push(row);
    }
    Ok(rows)
}

/// Creates two users, each with one task, for ownership isolation tests.
///
/// # Returns
/// - `Ok(((owner, owner_task), (other, other_task)))`
pub async fn create_two_users_with_tasks(
    db: &DatabaseConnection,
) -> Result<
    (
        (entity::user::Model, entity::task::Model),
        (entity::user::Model, entity::task::Model),
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let owner_task = crate::factory::task::create_task(db, owner.id).await?;
    let other = crate::factory::user::create_user(db).await?;
    let other_task = crate::factory::task::create_task(db, other.id).await?;

    Ok(((owner, owner_task), (other, other_task)))
}

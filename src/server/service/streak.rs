//! Streak computation and daily rollup recording.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::streak::StreakRepository,
    error::AppError,
    model::streak::{StreakDay, StreakSummary, UpsertStreakParams},
    util::date::days_before,
};

/// Number of most recent days considered for streaks.
const STREAK_HISTORY_LIMIT: u64 = 100;

/// Computes the current and longest streak from days ordered most recent first.
///
/// The current streak counts consecutive days ending today: day `i` of the history
/// must be exactly `today - i`. The longest streak is the longest run of adjacent
/// history entries exactly one day apart, and is never shorter than the current one.
///
/// # Arguments
/// - `days` - Active days, newest first, without duplicates
/// - `today` - Reference date
///
/// # Returns
/// - `(current, longest)` - Both zero for an empty history
pub fn compute_streaks(days: &[NaiveDate], today: NaiveDate) -> (u32, u32) {
    if days.is_empty() {
        return (0, 0);
    }

    let current = days
        .iter()
        .enumerate()
        .take_while(|(i, date)| **date == days_before(today, *i as u64))
        .count() as u32;

    let mut longest = 1;
    let mut running = 1;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            running += 1;
            longest = longest.max(running);
        } else {
            running = 1;
        }
    }

    (current, longest.max(running).max(current))
}

pub struct StreakService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StreakService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's streaks over the 100 most recent active days
    ///
    /// # Arguments
    /// - `user_id`: Owner of the history
    /// - `today`: Reference date for the current streak
    pub async fn summary(&self, user_id: i32, today: NaiveDate) -> Result<StreakSummary, AppError> {
        let repo = StreakRepository::new(self.db);

        let history = repo.get_recent(user_id, STREAK_HISTORY_LIMIT).await?;
        let dates: Vec<NaiveDate> = history.iter().map(|d| d.streak_date).collect();
        let (current_streak, longest_streak) = compute_streaks(&dates, today);

        Ok(StreakSummary {
            current_streak,
            longest_streak,
            history,
        })
    }

    /// Records a day's totals, replacing earlier totals for the same date
    pub async fn record(&self, params: UpsertStreakParams) -> Result<StreakDay, AppError> {
        let repo = StreakRepository::new(self.db);

        Ok(repo.upsert(params).await?)
    }
}

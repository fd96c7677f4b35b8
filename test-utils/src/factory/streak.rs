//! Streak factory for creating daily rollup rows.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating streak rows owned by a given user.
pub struct StreakFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    streak_date: NaiveDate,
    hours_completed: f64,
    tasks_completed: i32,
}

impl<'a> StreakFactory<'a> {
    /// Creates a new StreakFactory dated today with one hour and one task.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            streak_date: Utc::now().date_naive(),
            hours_completed: 1.0,
            tasks_completed: 1,
        }
    }

    pub fn streak_date(mut self, streak_date: NaiveDate) -> Self {
        self.streak_date = streak_date;
        self
    }

    pub fn hours_completed(mut self, hours: f64) -> Self {
        self.hours_completed = hours;
        self
    }

    pub fn tasks_completed(mut self, tasks: i32) -> Self {
        self.tasks_completed = tasks;
        self
    }

    /// Builds and inserts the streak entity into the database.
    pub async fn build(self) -> Result<entity::streak::Model, DbErr> {
        entity::streak::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            streak_date: ActiveValue::Set(self.streak_date),
            hours_completed: ActiveValue::Set(self.hours_completed),
            tasks_completed: ActiveValue::Set(self.tasks_completed),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a streak row for the given user and date.
pub async fn create_streak(
    db: &DatabaseConnection,
    user_id: i32,
    streak_date: NaiveDate,
) -> Result<entity::streak::Model, DbErr> {
    StreakFactory::new(db, user_id)
        .streak_date(streak_date)
        .build()
        .await
}

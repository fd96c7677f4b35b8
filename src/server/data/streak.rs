use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::streak::{StreakDay, UpsertStreakParams};

pub struct StreakRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StreakRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a day's totals, replacing any existing row for the same date
    ///
    /// # Arguments
    /// - `params`: Owner, date and totals
    ///
    /// # Returns
    /// - `Ok(StreakDay)`: The stored row
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(&self, params: UpsertStreakParams) -> Result<StreakDay, DbErr> {
        let user_id = params.user_id;
        let streak_date = params.streak_date;

        let streak = entity::streak::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            streak_date: ActiveValue::Set(params.streak_date),
            hours_completed: ActiveValue::Set(params.hours_completed),
            tasks_completed: ActiveValue::Set(params.tasks_completed),
            created_at: ActiveValue::Set(Utc::now()),
        };

        entity::prelude::Streak::insert(streak)
            .on_conflict(
                OnConflict::columns([
                    entity::streak::Column::UserId,
                    entity::streak::Column::StreakDate,
                ])
                .update_columns([
                    entity::streak::Column::HoursCompleted,
                    entity::streak::Column::TasksCompleted,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        let stored = entity::prelude::Streak::find_by_id((user_id, streak_date))
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Streak {} for user {}", streak_date, user_id))
            })?;

        Ok(StreakDay::from_entity(stored))
    }

    /// Gets the most recent streak rows, newest first
    ///
    /// # Arguments
    /// - `user_id`: Owner of the rows
    /// - `limit`: Maximum number of rows
    pub async fn get_recent(&self, user_id: i32, limit: u64) -> Result<Vec<StreakDay>, DbErr> {
        let rows = entity::prelude::Streak::find()
            .filter(entity::streak::Column::UserId.eq(user_id))
            .order_by_desc(entity::streak::Column::StreakDate)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(StreakDay::from_entity).collect())
    }

    /// Counts streak rows dated on or after `since`
    pub async fn count_since(&self, user_id: i32, since: NaiveDate) -> Result<u64, DbErr> {
        entity::prelude::Streak::find()
            .filter(entity::streak::Column::UserId.eq(user_id))
            .filter(entity::streak::Column::StreakDate.gte(since))
            .count(self.db)
            .await
    }
}

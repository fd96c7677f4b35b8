//! Streak domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::analytics::{StreakDayDto, StreakDto, UpdateStreakDto},
    server::error::AppError,
};

/// One day's activity rollup.
#[derive(Debug, Clone, PartialEq)]
pub struct StreakDay {
    pub streak_date: NaiveDate,
    pub hours_completed: f64,
    pub tasks_completed: i32,
}

impl StreakDay {
    /// Converts an entity model to a streak day at the repository boundary.
    pub fn from_entity(entity: entity::streak::Model) -> Self {
        Self {
            streak_date: entity.streak_date,
            hours_completed: entity.hours_completed,
            tasks_completed: entity.tasks_completed,
        }
    }

    pub fn into_dto(self) -> StreakDayDto {
        StreakDayDto {
            streak_date: self.streak_date,
            hours_completed: self.hours_completed,
            tasks_completed: self.tasks_completed,
        }
    }
}

/// Current and longest run of consecutive active days, with the history they were
/// computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Most recent days first.
    pub history: Vec<StreakDay>,
}

impl StreakSummary {
    pub fn into_dto(self) -> StreakDto {
        StreakDto {
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            streak_history: self.history.into_iter().map(StreakDay::into_dto).collect(),
        }
    }
}

/// Parameters for recording a day's totals.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertStreakParams {
    pub user_id: i32,
    pub streak_date: NaiveDate,
    pub hours_completed: f64,
    pub tasks_completed: i32,
}

impl UpsertStreakParams {
    /// Validates a streak update body.
    ///
    /// `date` is required; absent `hours` and `taskCount` record zero.
    ///
    /// # Returns
    /// - `Ok(UpsertStreakParams)` - Parameters bound to `user_id`
    /// - `Err(AppError::BadRequest)` - Missing date or negative totals
    pub fn from_dto(user_id: i32, dto: UpdateStreakDto) -> Result<Self, AppError> {
        let streak_date = dto
            .date
            .ok_or_else(|| AppError::BadRequest("Date is required".to_string()))?;
        let hours_completed = dto.hours.unwrap_or(0.0);
        let tasks_completed = dto.task_count.unwrap_or(0);

        if !hours_completed.is_finite() || hours_completed < 0.0 || tasks_completed < 0 {
            return Err(AppError::BadRequest(
                "Hours and task count must be non-negative".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            streak_date,
            hours_completed,
            tasks_completed,
        })
    }
}

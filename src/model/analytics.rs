use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DailyAnalyticsDto {
    pub date: NaiveDate,
    pub total_tasks: u64,
    pub total_planned_hours: f64,
    pub total_actual_hours: f64,
    pub completed_tasks: u64,
    pub partial_tasks: u64,
    pub skipped_tasks: u64,
    pub completion_percentage: i64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct DailyCategoryHoursDto {
    pub task_date: NaiveDate,
    pub category: String,
    pub hours: f64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct DailyHoursDto {
    pub date: NaiveDate,
    pub hours: f64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct CategoryStatsDto {
    pub category: String,
    pub total_hours: f64,
    pub task_count: u64,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAnalyticsDto {
    pub start_date: NaiveDate,
    pub daily_breakdown: Vec<DailyCategoryHoursDto>,
    pub category_stats: Vec<CategoryStatsDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAnalyticsDto {
    /// Month in `YYYY-MM` form.
    pub month: String,
    pub daily_breakdown: Vec<DailyHoursDto>,
    pub category_stats: Vec<CategoryStatsDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct StreakDayDto {
    pub streak_date: NaiveDate,
    pub hours_completed: f64,
    pub tasks_completed: i32,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StreakDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub streak_history: Vec<StreakDayDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStreakDto {
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub task_count: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct DailyQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyQuery {
    pub start_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct MonthlyQuery {
    /// Month in `YYYY-MM` form.
    pub month: Option<String>,
}

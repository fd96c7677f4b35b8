//! Task analytics over day, week and month windows.
//!
//! Rows are loaded per user for the window and aggregated here.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::BTreeMap;

use crate::server::{
    data::task::TaskRepository,
    error::AppError,
    model::{
        analytics::{
            CategoryStats, DailySummary, DayCategoryHours, DayHours, MonthRange,
            MonthlyBreakdown, WeeklyBreakdown,
        },
        task::{Task, TaskStatus},
    },
};

/// Summarizes one day's tasks.
///
/// # Arguments
/// - `date` - Day being summarized
/// - `tasks` - That day's tasks
pub fn summarize_day(date: NaiveDate, tasks: &[Task]) -> DailySummary {
    let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count() as u64;

    let total_planned_hours: f64 = tasks.iter().map(|t| t.planned_hours).sum();
    let total_actual_hours: f64 = tasks.iter().map(|t| t.actual_hours).sum();

    let completion_percentage = if total_planned_hours > 0.0 {
        (total_actual_hours / total_planned_hours * 100.0).round() as i64
    } else {
        0
    };

    DailySummary {
        date,
        total_tasks: tasks.len() as u64,
        total_planned_hours,
        total_actual_hours,
        completed_tasks: count(TaskStatus::Completed),
        partial_tasks: count(TaskStatus::Partial),
        skipped_tasks: count(TaskStatus::Skipped),
        completion_percentage,
    }
}

/// Totals actual hours per `(date, category)`, newest date first then category.
pub fn hours_by_day_and_category(tasks: &[Task]) -> Vec<DayCategoryHours> {
    let mut totals: BTreeMap<(NaiveDate, &str), f64> = BTreeMap::new();
    for task in tasks {
        *totals.entry((task.task_date, task.category.as_str())).or_default() += task.actual_hours;
    }

    let mut rows: Vec<DayCategoryHours> = totals
        .into_iter()
        .map(|((task_date, category), hours)| DayCategoryHours {
            task_date,
            category: category.to_string(),
            hours,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.task_date
            .cmp(&a.task_date)
            .then_with(|| a.category.cmp(&b.category))
    });

    rows
}

/// Totals actual hours per day, oldest first.
pub fn hours_by_day(tasks: &[Task]) -> Vec<DayHours> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for task in tasks {
        *totals.entry(task.task_date).or_default() += task.actual_hours;
    }

    totals
        .into_iter()
        .map(|(date, hours)| DayHours { date, hours })
        .collect()
}

/// Totals actual hours and task count per category, most hours first.
///
/// Ties are ordered by category name.
pub fn category_stats(tasks: &[Task]) -> Vec<CategoryStats> {
    let mut totals: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for task in tasks {
        let entry = totals.entry(task.category.as_str()).or_default();
        entry.0 += task.actual_hours;
        entry.1 += 1;
    }

    let mut stats: Vec<CategoryStats> = totals
        .into_iter()
        .map(|(category, (total_hours, task_count))| CategoryStats {
            category: category.to_string(),
            total_hours,
            task_count,
        })
        .collect();
    stats.sort_by(|a, b| {
        b.total_hours
            .total_cmp(&a.total_hours)
            .then_with(|| a.category.cmp(&b.category))
    });

    stats
}

pub struct AnalyticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn daily(&self, user_id: i32, date: NaiveDate) -> Result<DailySummary, AppError> {
        let repo = TaskRepository::new(self.db);

        let tasks = repo.get_by_date(user_id, date).await?;

        Ok(summarize_day(date, &tasks))
    }

    /// Breaks down tasks dated on or after `start_date`
    pub async fn weekly(
        &self,
        user_id: i32,
        start_date: NaiveDate,
    ) -> Result<WeeklyBreakdown, AppError> {
        let repo = TaskRepository::new(self.db);

        let tasks = repo.get_since(user_id, start_date).await?;

        Ok(WeeklyBreakdown {
            start_date,
            daily_breakdown: hours_by_day_and_category(&tasks),
            category_stats: category_stats(&tasks),
        })
    }

    pub async fn monthly(
        &self,
        user_id: i32,
        month: MonthRange,
    ) -> Result<MonthlyBreakdown, AppError> {
        let repo = TaskRepository::new(self.db);

        let tasks = repo
            .get_between(user_id, month.first_day, month.last_day)
            .await?;

        Ok(MonthlyBreakdown {
            month: month.label(),
            daily_breakdown: hours_by_day(&tasks),
            category_stats: category_stats(&tasks),
        })
    }
}

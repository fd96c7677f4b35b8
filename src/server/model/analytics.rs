//! Aggregated analytics results.
//!
//! Produced by the analytics service from raw task rows and converted to DTOs by the
//! controller.

use chrono::NaiveDate;

use crate::model::analytics::{
    CategoryStatsDto, DailyAnalyticsDto, DailyCategoryHoursDto, DailyHoursDto,
    MonthlyAnalyticsDto, WeeklyAnalyticsDto,
};

/// Task counts and hour totals for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_tasks: u64,
    pub total_planned_hours: f64,
    pub total_actual_hours: f64,
    pub completed_tasks: u64,
    pub partial_tasks: u64,
    pub skipped_tasks: u64,
    /// Actual over planned hours as a rounded percentage, 0 when nothing was planned.
    pub completion_percentage: i64,
}

impl DailySummary {
    pub fn into_dto(self) -> DailyAnalyticsDto {
        DailyAnalyticsDto {
            date: self.date,
            total_tasks: self.total_tasks,
            total_planned_hours: self.total_planned_hours,
            total_actual_hours: self.total_actual_hours,
            completed_tasks: self.completed_tasks,
            partial_tasks: self.partial_tasks,
            skipped_tasks: self.skipped_tasks,
            completion_percentage: self.completion_percentage,
        }
    }
}

/// Actual hours logged for a category on a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCategoryHours {
    pub task_date: NaiveDate,
    pub category: String,
    pub hours: f64,
}

/// Actual hours logged on a given day across all categories.
#[derive(Debug, Clone, PartialEq)]
pub struct DayHours {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Per-category totals over a window.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub category: String,
    pub total_hours: f64,
    pub task_count: u64,
}

impl CategoryStats {
    pub fn into_dto(self) -> CategoryStatsDto {
        CategoryStatsDto {
            category: self.category,
            total_hours: self.total_hours,
            task_count: self.task_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyBreakdown {
    pub start_date: NaiveDate,
    /// Ordered by date descending, then category ascending.
    pub daily_breakdown: Vec<DayCategoryHours>,
    /// Ordered by hours descending, then category ascending.
    pub category_stats: Vec<CategoryStats>,
}

impl WeeklyBreakdown {
    pub fn into_dto(self) -> WeeklyAnalyticsDto {
        WeeklyAnalyticsDto {
            start_date: self.start_date,
            daily_breakdown: self
                .daily_breakdown
                .into_iter()
                .map(|d| DailyCategoryHoursDto {
                    task_date: d.task_date,
                    category: d.category,
                    hours: d.hours,
                })
                .collect(),
            category_stats: self
                .category_stats
                .into_iter()
                .map(CategoryStats::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBreakdown {
    /// Month label in `YYYY-MM` form.
    pub month: String,
    /// Ordered by date ascending.
    pub daily_breakdown: Vec<DayHours>,
    pub category_stats: Vec<CategoryStats>,
}

impl MonthlyBreakdown {
    pub fn into_dto(self) -> MonthlyAnalyticsDto {
        MonthlyAnalyticsDto {
            month: self.month,
            daily_breakdown: self
                .daily_breakdown
                .into_iter()
                .map(|d| DailyHoursDto {
                    date: d.date,
                    hours: d.hours,
                })
                .collect(),
            category_stats: self
                .category_stats
                .into_iter()
                .map(CategoryStats::into_dto)
                .collect(),
        }
    }
}

/// Calendar month as an inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

impl MonthRange {
    /// `YYYY-MM` label of the month.
    pub fn label(&self) -> String {
        self.first_day.format("%Y-%m").to_string()
    }
}

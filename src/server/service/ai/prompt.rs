//! Prompt text for each AI endpoint.
//!
//! Context rows are embedded as JSON so the model sees the same field names the API
//! returns.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::server::{
    error::internal::InternalError,
    model::{
        profile::Profile,
        task::{Task, TaskStatus},
    },
};

/// Hours and task count logged on one day.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DayActivity {
    pub task_date: NaiveDate,
    pub hours: f64,
    pub tasks: u64,
}

/// Planned versus actual work in one category.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CategoryPerformance {
    pub category: String,
    pub planned: f64,
    pub actual: f64,
    pub task_count: u64,
    pub completed: u64,
}

/// Everything the daily suggestion prompt draws on.
pub struct DailyContext {
    pub profile: Option<Profile>,
    pub today_tasks: Vec<Task>,
    /// Newest day first.
    pub recent_days: Vec<DayActivity>,
    /// Active days in the last 30 days.
    pub streak_days: u64,
}

/// Groups tasks into per-day activity, newest day first.
pub fn activity_by_day(tasks: &[Task]) -> Vec<DayActivity> {
    let mut days: BTreeMap<NaiveDate, (f64, u64)> = BTreeMap::new();
    for task in tasks {
        let entry = days.entry(task.task_date).or_default();
        entry.0 += task.actual_hours;
        entry.1 += 1;
    }

    days.into_iter()
        .rev()
        .map(|(task_date, (hours, tasks))| DayActivity {
            task_date,
            hours,
            tasks,
        })
        .collect()
}

/// Groups tasks into per-category planned/actual totals, ordered by category.
pub fn category_performance(tasks: &[Task]) -> Vec<CategoryPerformance> {
    let mut categories: BTreeMap<&str, CategoryPerformance> = BTreeMap::new();
    for task in tasks {
        let entry = categories
            .entry(task.category.as_str())
            .or_insert_with(|| CategoryPerformance {
                category: task.category.clone(),
                planned: 0.0,
                actual: 0.0,
                task_count: 0,
                completed: 0,
            });
        entry.planned += task.planned_hours;
        entry.actual += task.actual_hours;
        entry.task_count += 1;
        if task.status == TaskStatus::Completed {
            entry.completed += 1;
        }
    }

    categories.into_values().collect()
}

pub fn onboarding(user_responses: &serde_json::Value) -> Result<String, InternalError> {
    let responses = serde_json::to_string_pretty(user_responses)?;

    Ok(format!(
        "You are a helpful productivity coach. Based on the following user responses about \
their study goals, provide a concise summary and recommendations.

User Responses:
{responses}

Please provide:
1. A brief summary of their goals
2. Recommended study focus areas
3. Suggested daily hours breakdown by topic

Format your response as JSON with keys: summary, focusAreas (array), suggestedSchedule (object)."
    ))
}

pub fn daily_suggestion(context: DailyContext) -> Result<String, InternalError> {
    let not_set = || "Not set".to_string();

    let (focus_areas, goals, target) = match &context.profile {
        Some(profile) => (
            Some(profile.focus_areas.join(", ")).filter(|areas| !areas.is_empty()),
            profile.goals.clone().filter(|goals| !goals.is_empty()),
            profile.daily_hours_target.map(|hours| hours.to_string()),
        ),
        None => (None, None, None),
    };

    let today_tasks = if context.today_tasks.is_empty() {
        "No tasks planned".to_string()
    } else {
        let dtos: Vec<_> = context
            .today_tasks
            .into_iter()
            .map(Task::into_dto)
            .collect();
        serde_json::to_string(&dtos)?
    };
    let history = serde_json::to_string(&context.recent_days)?;

    Ok(format!(
        "You are a productivity assistant helping a student stay on track with their learning goals.

User Profile:
- Focus Areas: {focus_areas}
- Goals: {goals}
- Daily Target: {target} hours

Today's Tasks: {today_tasks}

Recent History (last 7 days): {history}

Current Streak: {streak} days

Provide:
1. A motivational message (2-3 sentences)
2. What to prioritize today
3. One actionable tip for productivity

Keep it brief and encouraging!",
        focus_areas = focus_areas.unwrap_or_else(not_set),
        goals = goals.unwrap_or_else(not_set),
        target = target.unwrap_or_else(not_set),
        streak = context.streak_days,
    ))
}

pub fn weekly_insight(stats: &[CategoryPerformance]) -> Result<String, InternalError> {
    let stats = serde_json::to_string_pretty(stats)?;

    Ok(format!(
        "You are a productivity coach analyzing a student's weekly performance.

Weekly Statistics:
{stats}

Provide a concise weekly insight including:
1. Overall performance assessment
2. Strongest area (most consistent)
3. Area needing improvement
4. One specific recommendation for next week

Keep it constructive and actionable!"
    ))
}

pub fn chat(message: &str) -> String {
    format!(
        "You are a helpful productivity and study assistant. The user asks: \"{message}\"

Provide a concise, helpful response focused on productivity and learning."
    )
}

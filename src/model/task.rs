use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatusDto {
    Pending,
    Completed,
    Partial,
    Skipped,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct TaskDto {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub category: String,
    pub planned_hours: f64,
    pub actual_hours: f64,
    pub status: TaskStatusDto,
    pub task_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/tasks`. Fields are optional so missing ones produce a
/// uniform 400 instead of a deserialization rejection.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct CreateTaskDto {
    pub title: Option<String>,
    pub category: Option<String>,
    pub planned_hours: Option<f64>,
    pub task_date: Option<NaiveDate>,
}

/// Body of `PUT /api/tasks/{id}`; only present fields are applied.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateTaskDto {
    pub title: Option<String>,
    pub category: Option<String>,
    pub planned_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub status: Option<TaskStatusDto>,
    pub task_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct TaskDateQuery {
    pub date: Option<NaiveDate>,
}

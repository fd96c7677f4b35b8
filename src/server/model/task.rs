//! Task domain models and parameters.
//!
//! Provides the task model, its status enum, and the parameter types used by task
//! creation and partial updates.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::task::{CreateTaskDto, TaskDto, TaskStatusDto, UpdateTaskDto},
    server::error::AppError,
};

/// Completion state of a planned task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
    Partial,
    Skipped,
}

impl TaskStatus {
    pub fn from_entity(status: entity::task::TaskStatus) -> Self {
        match status {
            entity::task::TaskStatus::Pending => Self::Pending,
            entity::task::TaskStatus::Completed => Self::Completed,
            entity::task::TaskStatus::Partial => Self::Partial,
            entity::task::TaskStatus::Skipped => Self::Skipped,
        }
    }

    pub fn into_entity(self) -> entity::task::TaskStatus {
        match self {
            Self::Pending => entity::task::TaskStatus::Pending,
            Self::Completed => entity::task::TaskStatus::Completed,
            Self::Partial => entity::task::TaskStatus::Partial,
            Self::Skipped => entity::task::TaskStatus::Skipped,
        }
    }

    pub fn from_dto(dto: TaskStatusDto) -> Self {
        match dto {
            TaskStatusDto::Pending => Self::Pending,
            TaskStatusDto::Completed => Self::Completed,
            TaskStatusDto::Partial => Self::Partial,
            TaskStatusDto::Skipped => Self::Skipped,
        }
    }

    pub fn into_dto(self) -> TaskStatusDto {
        match self {
            Self::Pending => TaskStatusDto::Pending,
            Self::Completed => TaskStatusDto::Completed,
            Self::Partial => TaskStatusDto::Partial,
            Self::Skipped => TaskStatusDto::Skipped,
        }
    }
}

/// Unit of planned work for a single calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    /// Owner of the task.
    pub user_id: i32,
    pub title: String,
    /// Free-form grouping label used by analytics.
    pub category: String,
    pub planned_hours: f64,
    pub actual_hours: f64,
    pub status: TaskStatus,
    /// Day the task is planned for.
    pub task_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Converts an entity model to a task domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Task` - The converted task domain model
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            category: entity.category,
            planned_hours: entity.planned_hours,
            actual_hours: entity.actual_hours,
            status: TaskStatus::from_entity(entity.status),
            task_date: entity.task_date,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the task domain model to a DTO for API responses.
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            category: self.category,
            planned_hours: self.planned_hours,
            actual_hours: self.actual_hours,
            status: self.status.into_dto(),
            task_date: self.task_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskParams {
    /// Owner of the new task, taken from the authenticated user.
    pub user_id: i32,
    pub title: String,
    pub category: String,
    pub planned_hours: f64,
    pub task_date: NaiveDate,
}

impl CreateTaskParams {
    /// Validates a creation request and binds it to the authenticated user.
    ///
    /// Every field is required; blank strings and non-positive hours count as missing.
    ///
    /// # Arguments
    /// - `user_id` - Authenticated user the task will belong to
    /// - `dto` - Request body
    ///
    /// # Returns
    /// - `Ok(CreateTaskParams)` - All fields present and valid
    /// - `Err(AppError::BadRequest)` - A field is missing or invalid
    pub fn from_dto(user_id: i32, dto: CreateTaskDto) -> Result<Self, AppError> {
        let missing = || AppError::BadRequest("Missing required fields".to_string());

        let title = dto.title.filter(|t| !t.trim().is_empty()).ok_or_else(missing)?;
        let category = dto
            .category
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(missing)?;
        let planned_hours = dto
            .planned_hours
            .filter(|h| h.is_finite() && *h > 0.0)
            .ok_or_else(missing)?;
        let task_date = dto.task_date.ok_or_else(missing)?;

        Ok(Self {
            user_id,
            title,
            category,
            planned_hours,
            task_date,
        })
    }
}

/// Set of field changes for a partial task update.
///
/// `None` means "leave unchanged"; only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub planned_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub status: Option<TaskStatus>,
    pub task_date: Option<NaiveDate>,
}

impl TaskPatch {
    /// Converts an update request body into a patch.
    ///
    /// # Returns
    /// - `Ok(TaskPatch)` - Patch with the fields present in the body
    /// - `Err(AppError::BadRequest)` - Blank title/category or negative hours
    pub fn from_dto(dto: UpdateTaskDto) -> Result<Self, AppError> {
        if dto.title.as_deref().is_some_and(|t| t.trim().is_empty())
            || dto.category.as_deref().is_some_and(|c| c.trim().is_empty())
        {
            return Err(AppError::BadRequest(
                "Title and category cannot be empty".to_string(),
            ));
        }

        let invalid_hours = |h: &f64| !h.is_finite() || *h < 0.0;
        if dto.planned_hours.as_ref().is_some_and(invalid_hours)
            || dto.actual_hours.as_ref().is_some_and(invalid_hours)
        {
            return Err(AppError::BadRequest(
                "Hours must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            title: dto.title,
            category: dto.category,
            planned_hours: dto.planned_hours,
            actual_hours: dto.actual_hours,
            status: dto.status.map(TaskStatus::from_dto),
            task_date: dto.task_date,
        })
    }
}

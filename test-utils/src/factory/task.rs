//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, Utc};
use entity::task::TaskStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks owned by a given user.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    title: String,
    category: String,
    planned_hours: f64,
    actual_hours: f64,
    status: TaskStatus,
    task_date: NaiveDate,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Task {id}"`
    /// - category: `"general"`
    /// - planned_hours: `1.0`, actual_hours: `0.0`
    /// - status: `Pending`
    /// - task_date: today (UTC)
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            title: format!("Task {}", id),
            category: "general".to_string(),
            planned_hours: 1.0,
            actual_hours: 0.0,
            status: TaskStatus::Pending,
            task_date: Utc::now().date_naive(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn planned_hours(mut self, hours: f64) -> Self {
        self.planned_hours = hours;
        self
    }

    pub fn actual_hours(mut self, hours: f64) -> Self {
        self.actual_hours = hours;
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn task_date(mut self, task_date: NaiveDate) -> Self {
        self.task_date = task_date;
        self
    }

    /// Builds and inserts the task entity into the database.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();
        entity::task::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(self.category),
            planned_hours: ActiveValue::Set(self.planned_hours),
            actual_hours: ActiveValue::Set(self.actual_hours),
            status: ActiveValue::Set(self.status),
            task_date: ActiveValue::Set(self.task_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values for the given user.
pub async fn create_task(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, user_id).build().await
}

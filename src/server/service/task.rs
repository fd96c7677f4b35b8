use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::task::TaskRepository,
    error::AppError,
    model::task::{CreateTaskParams, Task, TaskPatch},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's tasks for one day, newest first
    pub async fn list_for_date(&self, user_id: i32, date: NaiveDate) -> Result<Vec<Task>, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.get_by_date(user_id, date).await?)
    }

    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, AppError> {
        let repo = TaskRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Applies a partial update to one of the user's tasks
    ///
    /// # Returns
    /// - `Ok(Task)`: The updated task
    /// - `Err(AppError::NotFound)`: No such task for this user
    /// - `Err(AppError)`: Database error
    pub async fn update(&self, user_id: i32, id: i32, patch: TaskPatch) -> Result<Task, AppError> {
        let repo = TaskRepository::new(self.db);

        repo.update(user_id, id, patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))
    }

    /// Deletes one of the user's tasks
    ///
    /// # Returns
    /// - `Ok(())`: The task was deleted
    /// - `Err(AppError::NotFound)`: No such task for this user
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        let repo = TaskRepository::new(self.db);

        if !repo.delete(user_id, id).await? {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        Ok(())
    }
}

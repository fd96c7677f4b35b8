use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::task::{CreateTaskParams, Task, TaskPatch};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new pending task with no hours logged
    ///
    /// # Arguments
    /// - `params`: Owner, title, category, planned hours and date
    ///
    /// # Returns
    /// - `Ok(Task)`: The created task
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, DbErr> {
        let now = Utc::now();

        let task = entity::task::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            title: ActiveValue::Set(params.title),
            category: ActiveValue::Set(params.category),
            planned_hours: ActiveValue::Set(params.planned_hours),
            actual_hours: ActiveValue::Set(0.0),
            status: ActiveValue::Set(entity::task::TaskStatus::Pending),
            task_date: ActiveValue::Set(params.task_date),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(task))
    }

    /// Gets a user's tasks planned for one day, newest first
    ///
    /// # Returns
    /// - `Ok(Vec<Task>)`: Tasks ordered by created_at descending
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_date(&self, user_id: i32, date: NaiveDate) -> Result<Vec<Task>, DbErr> {
        let tasks = entity::prelude::Task::find()
            .filter(entity::task::Column::UserId.eq(user_id))
            .filter(entity::task::Column::TaskDate.eq(date))
            .order_by_desc(entity::task::Column::CreatedAt)
            .order_by_desc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Gets a user's tasks dated on or after `start`
    pub async fn get_since(&self, user_id: i32, start: NaiveDate) -> Result<Vec<Task>, DbErr> {
        let tasks = entity::prelude::Task::find()
            .filter(entity::task::Column::UserId.eq(user_id))
            .filter(entity::task::Column::TaskDate.gte(start))
            .order_by_asc(entity::task::Column::TaskDate)
            .all(self.db)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Gets a user's tasks dated within `first..=last`
    pub async fn get_between(
        &self,
        user_id: i32,
        first: NaiveDate,
        last: NaiveDate,
    ) -> Result<Vec<Task>, DbErr> {
        let tasks = entity::prelude::Task::find()
            .filter(entity::task::Column::UserId.eq(user_id))
            .filter(entity::task::Column::TaskDate.between(first, last))
            .order_by_asc(entity::task::Column::TaskDate)
            .all(self.db)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Applies a partial update to a task owned by `user_id`
    ///
    /// Only fields present in the patch are written; `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `user_id`: Owner the task must belong to
    /// - `id`: Task ID
    /// - `patch`: Field changes
    ///
    /// # Returns
    /// - `Ok(Some(Task))`: The updated task
    /// - `Ok(None)`: No task with this id belongs to the user
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        patch: TaskPatch,
    ) -> Result<Option<Task>, DbErr> {
        let Some(task) = entity::prelude::Task::find_by_id(id)
            .filter(entity::task::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::task::ActiveModel = task.into();

        if let Some(title) = patch.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(category) = patch.category {
            active_model.category = ActiveValue::Set(category);
        }
        if let Some(planned_hours) = patch.planned_hours {
            active_model.planned_hours = ActiveValue::Set(planned_hours);
        }
        if let Some(actual_hours) = patch.actual_hours {
            active_model.actual_hours = ActiveValue::Set(actual_hours);
        }
        if let Some(status) = patch.status {
            active_model.status = ActiveValue::Set(status.into_entity());
        }
        if let Some(task_date) = patch.task_date {
            active_model.task_date = ActiveValue::Set(task_date);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Ok(Some(Task::from_entity(updated)))
    }

    /// Deletes a task owned by `user_id`
    ///
    /// # Returns
    /// - `Ok(true)`: The task was deleted
    /// - `Ok(false)`: No task with this id belongs to the user
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_many()
            .filter(entity::task::Column::Id.eq(id))
            .filter(entity::task::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

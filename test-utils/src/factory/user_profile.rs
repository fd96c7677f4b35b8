//! Profile factory for creating onboarding data.

use chrono::Utc;
use entity::StringList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a user's profile row.
pub struct UserProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    studying_topics: Option<Vec<String>>,
    goals: Option<String>,
    focus_areas: Option<Vec<String>>,
    daily_hours_target: Option<f64>,
    onboarding_completed: bool,
}

impl<'a> UserProfileFactory<'a> {
    /// Creates a new factory for an empty, not-yet-onboarded profile.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            studying_topics: None,
            goals: None,
            focus_areas: None,
            daily_hours_target: None,
            onboarding_completed: false,
        }
    }

    pub fn studying_topics(mut self, topics: &[&str]) -> Self {
        self.studying_topics = Some(topics.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn goals(mut self, goals: impl Into<String>) -> Self {
        self.goals = Some(goals.into());
        self
    }

    pub fn focus_areas(mut self, areas: &[&str]) -> Self {
        self.focus_areas = Some(areas.iter().map(|a| a.to_string()).collect());
        self
    }

    pub fn daily_hours_target(mut self, hours: f64) -> Self {
        self.daily_hours_target = Some(hours);
        self
    }

    pub fn onboarding_completed(mut self, completed: bool) -> Self {
        self.onboarding_completed = completed;
        self
    }

    /// Builds and inserts the profile entity into the database.
    pub async fn build(self) -> Result<entity::user_profile::Model, DbErr> {
        let now = Utc::now();
        entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            studying_topics: ActiveValue::Set(self.studying_topics.map(StringList)),
            goals: ActiveValue::Set(self.goals),
            focus_areas: ActiveValue::Set(self.focus_areas.map(StringList)),
            daily_hours_target: ActiveValue::Set(self.daily_hours_target),
            onboarding_completed: ActiveValue::Set(self.onboarding_completed),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty profile for the given user.
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user_profile::Model, DbErr> {
    UserProfileFactory::new(db, user_id).build().await
}

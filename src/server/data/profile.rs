use chrono::Utc;
use entity::StringList;
use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::profile::{Profile, ProfilePatch};

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Profile>, DbErr> {
        let profile = entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(profile.map(Profile::from_entity))
    }

    /// Creates or updates a user's profile, keeping stored values for absent fields
    ///
    /// A single insert with `ON CONFLICT (user_id)` that only overwrites the columns
    /// present in the patch, so concurrent first writes cannot collide. A new profile
    /// starts with `onboarding_completed = false` unless the patch sets it.
    ///
    /// # Arguments
    /// - `user_id`: Owner of the profile
    /// - `patch`: Field changes
    ///
    /// # Returns
    /// - `Ok(Profile)`: The stored profile
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(&self, user_id: i32, patch: ProfilePatch) -> Result<Profile, DbErr> {
        use entity::user_profile::Column;

        let now = Utc::now();
        let mut update_columns = vec![Column::UpdatedAt];

        let mut profile = entity::user_profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            onboarding_completed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        if let Some(topics) = patch.studying_topics {
            profile.studying_topics = ActiveValue::Set(Some(StringList(topics)));
            update_columns.push(Column::StudyingTopics);
        }
        if let Some(goals) = patch.goals {
            profile.goals = ActiveValue::Set(Some(goals));
            update_columns.push(Column::Goals);
        }
        if let Some(areas) = patch.focus_areas {
            profile.focus_areas = ActiveValue::Set(Some(StringList(areas)));
            update_columns.push(Column::FocusAreas);
        }
        if let Some(target) = patch.daily_hours_target {
            profile.daily_hours_target = ActiveValue::Set(Some(target));
            update_columns.push(Column::DailyHoursTarget);
        }
        if let Some(completed) = patch.onboarding_completed {
            profile.onboarding_completed = ActiveValue::Set(completed);
            update_columns.push(Column::OnboardingCompleted);
        }

        entity::prelude::UserProfile::insert(profile)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        let stored = entity::prelude::UserProfile::find_by_id(user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("profile for user {}", user_id)))?;

        Ok(Profile::from_entity(stored))
    }
}

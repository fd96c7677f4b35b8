use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::profile::{Profile, ProfilePatch},
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's profile, or an empty not-yet-onboarded profile if none is stored
    pub async fn get(&self, user_id: i32) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        let profile = repo.find_by_user_id(user_id).await?;

        Ok(profile.unwrap_or_else(|| Profile::empty(user_id)))
    }

    /// Saves profile changes, keeping stored values for fields the patch leaves out
    pub async fn update(&self, user_id: i32, patch: ProfilePatch) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        Ok(repo.upsert(user_id, patch).await?)
    }
}

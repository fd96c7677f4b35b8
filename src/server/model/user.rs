//! User domain model.

use chrono::{DateTime, Utc};

use crate::model::auth::AuthDto;

/// Account holder with the stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Argon2id hash in PHC string form.
    pub password_hash: String,
    /// When the account was provisioned.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Builds the login response for this user.
    ///
    /// # Arguments
    /// - `token` - Signed bearer token issued for the user
    ///
    /// # Returns
    /// - `AuthDto` - Token plus the user's id and username
    pub fn into_auth_dto(self, token: String) -> AuthDto {
        AuthDto {
            token,
            user_id: self.id,
            username: self.username,
        }
    }
}

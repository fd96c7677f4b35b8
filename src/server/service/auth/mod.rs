//! Password login and default account provisioning.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

pub mod password;
pub mod token;

use token::TokenService;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Logs in as the configured account with a password.
    ///
    /// # Arguments
    /// - `username` - Account to log in as
    /// - `password` - Password from the request body, if any
    ///
    /// # Returns
    /// - `Ok((User, String))` - The user and a freshly issued token
    /// - `Err(AppError::BadRequest)` - No password given
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown account or wrong password
    pub async fn login(
        &self,
        username: &str,
        password: Option<String>,
    ) -> Result<(User, String), AppError> {
        let Some(password) = password.filter(|p| !p.is_empty()) else {
            return Err(AppError::BadRequest("Password is required".to_string()));
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.id)?;

        Ok((user, token))
    }

    /// Creates the account if no user with this username exists.
    ///
    /// An existing account is returned unchanged; its password is never overwritten.
    ///
    /// # Returns
    /// - `Ok((User, true))` - The account was created
    /// - `Ok((User, false))` - The account already existed
    pub async fn ensure_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(User, bool), AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_username(username).await? {
            return Ok((user, false));
        }

        let password_hash = password::hash_password(password)?;
        let user = user_repo.create(username.to_string(), password_hash).await?;

        Ok((user, true))
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent.
    ///
    /// Results in 401 Unauthorized.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The bearer token failed signature, format or expiry checks.
    ///
    /// Results in 403 Forbidden.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(String),

    /// The token is valid but names a user that no longer exists.
    ///
    /// Results in 401 Unauthorized.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// Login password missing or did not verify against the stored hash.
    ///
    /// Results in 401 Unauthorized.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the detailed reason is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - Missing token, unknown user, bad credentials
/// - 403 Forbidden - Invalid or expired token
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Access token required"),
            Self::InvalidToken(_) => (StatusCode::FORBIDDEN, "Invalid or expired token"),
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "Access token required"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

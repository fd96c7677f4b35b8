//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs issued and verified with `jsonwebtoken`. Claims carry the user
//! id, issue time and expiry as Unix seconds.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::server::error::{auth::AuthError, internal::InternalError, AppError};

/// Lifetime of an issued token.
const TOKEN_TTL_DAYS: i64 = 30;

/// Length of a generated signing secret.
const GENERATED_SECRET_LENGTH: usize = 64;

/// Claims carried by a token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Id of the authenticated user.
    pub user_id: i32,
    /// Issued at, Unix seconds.
    pub iat: i64,
    /// Expires at, Unix seconds.
    pub exp: i64,
}

/// Issues and verifies HS256 tokens with a process-wide secret.
///
/// Cheap to clone; the secret is shared behind an `Arc`.
#[derive(Clone)]
pub struct TokenService {
    secret: Arc<SecretString>,
}

impl TokenService {
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret: Arc::new(secret),
        }
    }

    /// Generates a random alphanumeric signing secret.
    ///
    /// Tokens signed with a generated secret do not survive a restart.
    pub fn generate_secret() -> SecretString {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";

        let mut rng = rand::rng();

        let secret: String = (0..GENERATED_SECRET_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();

        SecretString::from(secret)
    }

    /// Issues a token for a user, valid for 30 days.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalErr(TokenSigning))` - Claims could not be encoded
    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        let now = Utc::now();
        self.encode(&Claims {
            user_id,
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        })
    }

    /// Verifies a token's algorithm, signature and expiry.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Any check failed
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }

    fn encode(&self, claims: &Claims) -> Result<String, AppError> {
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| InternalError::TokenSigning(e.to_string()))?;

        Ok(token)
    }
}

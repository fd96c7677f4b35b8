use secrecy::SecretString;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_USERNAME: &str = "default_user";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-pro";
const AI_TIMEOUT_SECS: u64 = 60;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    pub default_username: String,
    pub default_password: SecretString,
    /// Signing secret for bearer tokens; a random one is generated at startup when unset.
    pub jwt_secret: Option<SecretString>,

    pub gemini_api_url: String,
    pub gemini_model: String,
    /// Fallback key used when a request does not carry its own `apiKey`.
    pub gemini_api_key: Option<SecretString>,
    pub ai_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", DEFAULT_PORT)?,
            default_username: optional("DEFAULT_USERNAME")
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            default_password: SecretString::from(required("DEFAULT_PASSWORD")?),
            jwt_secret: optional("JWT_SECRET").map(SecretString::from),
            gemini_api_url: optional("GEMINI_API_URL")
                .unwrap_or_else(|| GEMINI_API_URL.to_string()),
            gemini_model: optional("GEMINI_MODEL").unwrap_or_else(|| GEMINI_MODEL.to_string()),
            gemini_api_key: optional("GEMINI_API_KEY").map(SecretString::from),
            ai_timeout_secs: parse_or("AI_TIMEOUT_SECS", AI_TIMEOUT_SECS)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

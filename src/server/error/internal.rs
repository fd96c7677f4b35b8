use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Failure to encode token claims or initialize the signing key.
    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    /// Failure to serialize data embedded into an AI prompt.
    #[error("Failed to serialize prompt context: {0}")]
    PromptContext(#[from] serde_json::Error),

    /// Date arithmetic left chrono's supported range.
    #[error("Date out of range: {0}")]
    DateOutOfRange(String),
}

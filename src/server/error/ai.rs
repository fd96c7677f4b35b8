use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AiError {
    /// The generateContent request could not be sent or its body not read.
    ///
    /// Built from errors stripped with `without_url`.
    #[error("AI request failed: {0}")]
    Request(reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("AI API returned {status}: {body}")]
    Status {
        /// HTTP status returned by the upstream
        status: u16,
        /// Response body, for logging
        body: String,
    },

    /// The response did not contain a text candidate.
    #[error("AI response contained no text candidate")]
    EmptyResponse,

    /// The configured base URL could not be joined with the model path.
    #[error("Invalid AI endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Converts AI errors into a 500 with a generic message; details are only logged.
impl IntoResponse for AiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Failed to get AI response".to_string(),
            }),
        )
            .into_response()
    }
}

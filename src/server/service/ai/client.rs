//! Minimal client for the Gemini `generateContent` endpoint.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::error::ai::AiError;

/// Header carrying the API key, so the key never appears in a request URL.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Endpoint settings for the generative AI API.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: Url,
    model: String,
}

impl GeminiClient {
    /// # Arguments
    /// - `http_client` - Shared client; its timeout bounds every AI call
    /// - `base_url` - API root such as `https://generativelanguage.googleapis.com/v1beta`
    /// - `model` - Model name such as `gemini-pro`
    pub fn new(http_client: reqwest::Client, base_url: Url, model: String) -> Self {
        Self {
            http_client,
            base_url,
            model,
        }
    }

    /// URL of the `generateContent` call, without the key.
    fn endpoint(&self) -> Result<Url, AiError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(base.join(&format!("models/{}:generateContent", self.model))?)
    }

    /// Sends one prompt and returns the generated text.
    ///
    /// # Arguments
    /// - `api_key` - Key sent in the `x-goog-api-key` header
    /// - `prompt` - Full prompt text
    ///
    /// # Returns
    /// - `Ok(String)` - Text of the first candidate
    /// - `Err(AiError)` - Transport failure, non-success status or empty response
    pub async fn generate(&self, api_key: &SecretString, prompt: &str) -> Result<String, AiError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint()?)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| AiError::Request(e.without_url()))?
            .into_text()
            .ok_or(AiError::EmptyResponse)
    }
}

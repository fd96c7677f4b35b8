use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequestDto {
    pub api_key: Option<String>,
    #[schema(value_type = Object)]
    #[serde(default)]
    pub user_responses: serde_json::Value,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiKeyRequestDto {
    pub api_key: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestDto {
    pub api_key: Option<String>,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingResponseDto {
    pub ai_response: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct SuggestionResponseDto {
    pub suggestion: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct InsightResponseDto {
    pub insight: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ChatResponseDto {
    pub response: String,
}

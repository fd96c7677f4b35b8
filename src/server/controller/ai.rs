use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        ai::{
            AiKeyRequestDto, ChatRequestDto, ChatResponseDto, InsightResponseDto,
            OnboardingRequestDto, OnboardingResponseDto, SuggestionResponseDto,
        },
        api::ErrorDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::ai::AiService, state::AppState,
        util::date::today,
    },
};

pub static AI_TAG: &str = "ai";

fn ai_service(state: &AppState) -> AiService<'_> {
    AiService::new(&state.db, &state.ai_client, state.ai_api_key.as_deref())
}

#[utoipa::path(
    post,
    path = "/api/ai/onboarding",
    tag = AI_TAG,
    request_body = OnboardingRequestDto,
    responses(
        (status = 200, description = "Summary of goals and a suggested schedule", body = OnboardingResponseDto),
        (status = 400, description = "AI API key is required", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Failed to get AI response", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn onboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<OnboardingRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let ai_response = ai_service(&state)
        .onboarding(payload.api_key, &payload.user_responses)
        .await?;

    Ok((StatusCode::OK, Json(OnboardingResponseDto { ai_response })))
}

#[utoipa::path(
    post,
    path = "/api/ai/daily-suggestion",
    tag = AI_TAG,
    request_body = AiKeyRequestDto,
    responses(
        (status = 200, description = "Suggestion for today", body = SuggestionResponseDto),
        (status = 400, description = "AI API key is required", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Failed to get AI response", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn daily_suggestion(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AiKeyRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let suggestion = ai_service(&state)
        .daily_suggestion(user.id, payload.api_key, today())
        .await?;

    Ok((StatusCode::OK, Json(SuggestionResponseDto { suggestion })))
}

#[utoipa::path(
    post,
    path = "/api/ai/weekly-insight",
    tag = AI_TAG,
    request_body = AiKeyRequestDto,
    responses(
        (status = 200, description = "Assessment of the last 7 days", body = InsightResponseDto),
        (status = 400, description = "AI API key is required", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Failed to get AI response", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn weekly_insight(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AiKeyRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let insight = ai_service(&state)
        .weekly_insight(user.id, payload.api_key, today())
        .await?;

    Ok((StatusCode::OK, Json(InsightResponseDto { insight })))
}

#[utoipa::path(
    post,
    path = "/api/ai/chat",
    tag = AI_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Answer to the message", body = ChatResponseDto),
        (status = 400, description = "AI API key or message missing", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Failed to get AI response", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ChatRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let response = ai_service(&state)
        .chat(payload.api_key, payload.message)
        .await?;

    Ok((StatusCode::OK, Json(ChatResponseDto { response })))
}

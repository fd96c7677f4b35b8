use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, UpdateProfileDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::profile::ProfilePatch,
        service::profile::ProfileService, state::AppState,
    },
};

pub static PROFILE_TAG: &str = "profile";

#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Stored profile, or an empty one before onboarding", body = ProfileDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let profile = ProfileService::new(&state.db).get(user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile saved; omitted fields keep their stored value", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateProfileDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let profile = ProfileService::new(&state.db)
        .update(user.id, ProfilePatch::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

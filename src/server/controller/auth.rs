use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthDto, LoginDto},
    },
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in; token is valid for 30 days", body = AuthDto),
        (status = 400, description = "Password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .login(&state.login_username, payload.password)
        .await?;

    Ok((StatusCode::OK, Json(user.into_auth_dto(token))))
}

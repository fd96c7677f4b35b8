use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        analytics::{
            DailyAnalyticsDto, DailyQuery, MonthlyAnalyticsDto, MonthlyQuery, StreakDto,
            UpdateStreakDto, WeeklyAnalyticsDto, WeeklyQuery,
        },
        api::{ErrorDto, MessageDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        middleware::auth::AuthGuard,
        model::streak::UpsertStreakParams,
        service::{analytics::AnalyticsService, streak::StreakService},
        state::AppState,
        util::{
            date::{days_before, today},
            parse::{month_of, parse_month},
        },
    },
};

pub static ANALYTICS_TAG: &str = "analytics";

/// Default lookback of the weekly breakdown.
const WEEK_DAYS: u64 = 7;

#[utoipa::path(
    get,
    path = "/api/analytics/daily",
    tag = ANALYTICS_TAG,
    params(
        ("date" = Option<String>, Query, description = "Day to summarize (YYYY-MM-DD, default: today)")
    ),
    responses(
        (status = 200, description = "Daily task summary", body = DailyAnalyticsDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_daily(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DailyQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Query(query) = query?;

    let summary = AnalyticsService::new(&state.db)
        .daily(user.id, query.date.unwrap_or_else(today))
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/analytics/weekly",
    tag = ANALYTICS_TAG,
    params(
        ("startDate" = Option<String>, Query, description = "First day to include (YYYY-MM-DD, default: 7 days ago)")
    ),
    responses(
        (status = 200, description = "Hours per day and category since the start date", body = WeeklyAnalyticsDto),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_weekly(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<WeeklyQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Query(query) = query?;

    let start_date = query
        .start_date
        .unwrap_or_else(|| days_before(today(), WEEK_DAYS));
    let breakdown = AnalyticsService::new(&state.db)
        .weekly(user.id, start_date)
        .await?;

    Ok((StatusCode::OK, Json(breakdown.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/analytics/monthly",
    tag = ANALYTICS_TAG,
    params(
        ("month" = Option<String>, Query, description = "Month to break down (YYYY-MM, default: current month)")
    ),
    responses(
        (status = 200, description = "Hours per day and category for the month", body = MonthlyAnalyticsDto),
        (status = 400, description = "Invalid month", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_monthly(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<MonthlyQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Query(query) = query?;

    let month = match query.month {
        Some(month) => parse_month(&month)?,
        None => month_of(today()).ok_or_else(|| {
            InternalError::DateOutOfRange("current month has no upper bound".to_string())
        })?,
    };
    let breakdown = AnalyticsService::new(&state.db)
        .monthly(user.id, month)
        .await?;

    Ok((StatusCode::OK, Json(breakdown.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/analytics/streak",
    tag = ANALYTICS_TAG,
    responses(
        (status = 200, description = "Current and longest streak with the last 100 active days", body = StreakDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_streak(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;

    let summary = StreakService::new(&state.db)
        .summary(user.id, today())
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/analytics/streak/update",
    tag = ANALYTICS_TAG,
    request_body = UpdateStreakDto,
    responses(
        (status = 200, description = "Totals recorded for the date", body = MessageDto),
        (status = 400, description = "Invalid streak data", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_streak(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateStreakDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    StreakService::new(&state.db)
        .record(UpsertStreakParams::from_dto(user.id, payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Streak updated successfully")),
    ))
}

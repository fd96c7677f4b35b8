use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        task::{CreateTaskDto, TaskDateQuery, TaskDto, UpdateTaskDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::task::{CreateTaskParams, TaskPatch},
        service::task::TaskService,
        state::AppState,
        util::date::today,
    },
};

pub static TASK_TAG: &str = "task";

#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    params(
        ("date" = Option<String>, Query, description = "Day to list (YYYY-MM-DD, default: today)")
    ),
    responses(
        (status = 200, description = "Tasks for the day, newest first", body = Vec<TaskDto>),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<TaskDateQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Query(query) = query?;

    let tasks = TaskService::new(&state.db)
        .list_for_date(user.id, query.date.unwrap_or_else(today))
        .await?;

    let dto: Vec<TaskDto> = tasks.into_iter().map(|task| task.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Json(payload) = payload?;

    let task = TaskService::new(&state.db)
        .create(CreateTaskParams::from_dto(user.id, payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated; omitted fields are unchanged", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn update_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTaskDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let task = TaskService::new(&state.db)
        .update(user.id, id, TaskPatch::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageDto),
        (status = 401, description = "Access token required", body = ErrorDto),
        (status = 403, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require()
        .await?;
    let Path(id) = id?;

    TaskService::new(&state.db).delete(user.id, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Task deleted successfully")),
    ))
}

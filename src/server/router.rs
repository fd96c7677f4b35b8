use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{ai, analytics, auth, health, profile, task},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Progress Tracker API", description = "Tasks, analytics, profile and AI coaching"),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "auth", description = "Password login"),
        (name = "task", description = "Daily study tasks"),
        (name = "analytics", description = "Hours, completion and streaks"),
        (name = "profile", description = "Study goals and preferences"),
        (name = "ai", description = "Generative AI coaching")
    )
)]
struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(auth::login))
        .routes(routes!(task::get_tasks, task::create_task))
        .routes(routes!(task::update_task, task::delete_task))
        .routes(routes!(analytics::get_daily))
        .routes(routes!(analytics::get_weekly))
        .routes(routes!(analytics::get_monthly))
        .routes(routes!(analytics::get_streak))
        .routes(routes!(analytics::update_streak))
        .routes(routes!(profile::get_profile, profile::update_profile))
        .routes(routes!(ai::onboarding))
        .routes(routes!(ai::daily_suggestion))
        .routes(routes!(ai::weekly_insight))
        .routes(routes!(ai::chat))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct ProfileDto {
    pub user_id: i32,
    pub studying_topics: Vec<String>,
    pub goals: Option<String>,
    pub focus_areas: Vec<String>,
    pub daily_hours_target: Option<f64>,
    pub onboarding_completed: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/profile`; absent or null fields keep their stored value.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateProfileDto {
    pub studying_topics: Option<Vec<String>>,
    pub goals: Option<String>,
    pub focus_areas: Option<Vec<String>>,
    pub daily_hours_target: Option<f64>,
    pub onboarding_completed: Option<bool>,
}

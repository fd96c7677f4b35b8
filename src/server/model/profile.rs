//! Profile domain model and coalescing patch.

use chrono::{DateTime, Utc};

use crate::model::profile::{ProfileDto, UpdateProfileDto};

/// Onboarding answers and study preferences of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: i32,
    pub studying_topics: Vec<String>,
    pub goals: Option<String>,
    pub focus_areas: Vec<String>,
    pub daily_hours_target: Option<f64>,
    pub onboarding_completed: bool,
    /// `None` until the profile is first stored.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Profile reported for a user who has never saved one.
    pub fn empty(user_id: i32) -> Self {
        Self {
            user_id,
            studying_topics: Vec::new(),
            goals: None,
            focus_areas: Vec::new(),
            daily_hours_target: None,
            onboarding_completed: false,
            created_at: None,
            updated_at: None,
        }
    }

    /// Converts an entity model to a profile domain model at the repository boundary.
    ///
    /// Null list columns become empty lists.
    pub fn from_entity(entity: entity::user_profile::Model) -> Self {
        Self {
            user_id: entity.user_id,
            studying_topics: entity.studying_topics.map(|l| l.0).unwrap_or_default(),
            goals: entity.goals,
            focus_areas: entity.focus_areas.map(|l| l.0).unwrap_or_default(),
            daily_hours_target: entity.daily_hours_target,
            onboarding_completed: entity.onboarding_completed,
            created_at: Some(entity.created_at),
            updated_at: Some(entity.updated_at),
        }
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user_id: self.user_id,
            studying_topics: self.studying_topics,
            goals: self.goals,
            focus_areas: self.focus_areas,
            daily_hours_target: self.daily_hours_target,
            onboarding_completed: self.onboarding_completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Profile field changes; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub studying_topics: Option<Vec<String>>,
    pub goals: Option<String>,
    pub focus_areas: Option<Vec<String>>,
    pub daily_hours_target: Option<f64>,
    pub onboarding_completed: Option<bool>,
}

impl ProfilePatch {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            studying_topics: dto.studying_topics,
            goals: dto.goals,
            focus_areas: dto.focus_areas,
            daily_hours_target: dto.daily_hours_target,
            onboarding_completed: dto.onboarding_completed,
        }
    }
}

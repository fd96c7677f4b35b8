//! Domain models and operation parameters.
//!
//! Types here sit between the wire DTOs in `crate::model` and the SeaORM entities. Each
//! model provides `from_entity` for the repository boundary and `into_dto` for the
//! controller boundary; parameter types provide `from_dto` where request validation
//! happens.

pub mod analytics;
pub mod profile;
pub mod streak;
pub mod task;
pub mod user;

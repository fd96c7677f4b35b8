//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Streak computation, analytics aggregation, credential checks
//! - **Orchestration**: Coordinating repository calls and the external AI API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod ai;
pub mod analytics;
pub mod auth;
pub mod profile;
pub mod streak;
pub mod task;

//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard` (except login and health), converts
//! request DTOs into domain parameters, calls a service and converts the result back to
//! a DTO. Handlers are annotated with `utoipa::path` for the generated API document.

pub mod ai;
pub mod analytics;
pub mod auth;
pub mod health;
pub mod profile;
pub mod task;

#[cfg(test)]
mod test;

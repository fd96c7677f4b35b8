//! Wire-level request and response types shared by the HTTP API.

pub mod ai;
pub mod analytics;
pub mod api;
pub mod auth;
pub mod profile;
pub mod task;

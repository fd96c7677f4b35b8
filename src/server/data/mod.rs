//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every query that touches user-owned rows is scoped by the owning user's id.

pub mod profile;
pub mod streak;
pub mod task;
pub mod user;

#[cfg(test)]
mod test;

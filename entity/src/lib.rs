//! SeaORM entities for the tracker schema.

pub mod prelude;

pub mod streak;
pub mod task;
pub mod user;
pub mod user_profile;

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Free-form list of strings persisted as a JSON array column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

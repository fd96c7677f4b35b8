use crate::server::{data::profile::ProfileRepository, model::profile::ProfilePatch};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_user_id;
mod upsert;

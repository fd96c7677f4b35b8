use crate::server::{
    data::task::TaskRepository,
    model::task::{CreateTaskParams, TaskPatch, TaskStatus},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_between;
mod get_by_date;
mod get_since;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

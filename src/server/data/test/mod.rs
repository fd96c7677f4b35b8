mod profile;
mod streak;
mod task;
mod user;

//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories take
//! the owning user id explicitly so tests control foreign key relationships.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let task = factory::task::TaskFactory::new(&db, user.id)
//!     .title("Read chapter 3")
//!     .planned_hours(2.0)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod streak;
pub mod task;
pub mod user;
pub mod user_profile;

pub use streak::create_streak;
pub use task::create_task;
pub use user::create_user;
pub use user_profile::create_profile;

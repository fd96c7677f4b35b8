pub use super::streak::Entity as Streak;
pub use super::task::Entity as Task;
pub use super::user::Entity as User;
pub use super::user_profile::Entity as UserProfile;

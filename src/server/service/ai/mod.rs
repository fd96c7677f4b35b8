//! Generative AI suggestions built from the user's own data.
//!
//! Each operation gathers context, renders a prompt and makes a single call to the
//! configured model.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use secrecy::{ExposeSecret, SecretString};

use crate::server::{
    data::{profile::ProfileRepository, streak::StreakRepository, task::TaskRepository},
    error::AppError,
    util::date::days_before,
};

pub mod client;
pub mod prompt;

use client::GeminiClient;

/// Days of task history included in the daily suggestion and weekly insight.
const RECENT_DAYS: u64 = 7;

/// Window for counting active streak days in the daily suggestion.
const STREAK_WINDOW_DAYS: u64 = 30;

pub struct AiService<'a> {
    db: &'a DatabaseConnection,
    client: &'a GeminiClient,
    fallback_key: Option<&'a SecretString>,
}

impl<'a> AiService<'a> {
    /// # Arguments
    /// - `db` - Database connection for prompt context
    /// - `client` - Configured model endpoint
    /// - `fallback_key` - Server-held key used when a request brings none
    pub fn new(
        db: &'a DatabaseConnection,
        client: &'a GeminiClient,
        fallback_key: Option<&'a SecretString>,
    ) -> Self {
        Self {
            db,
            client,
            fallback_key,
        }
    }

    /// Picks the caller's key, falling back to the server key
    ///
    /// # Returns
    /// - `Ok(SecretString)`: Key to call the model with
    /// - `Err(AppError::BadRequest)`: Neither key is available
    fn resolve_key(&self, api_key: Option<String>) -> Result<SecretString, AppError> {
        api_key
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from)
            .or_else(|| {
                self.fallback_key
                    .map(|key| SecretString::from(key.expose_secret().to_string()))
            })
            .ok_or_else(|| AppError::BadRequest("AI API key is required".to_string()))
    }

    /// Summarizes onboarding answers into goals, focus areas and a schedule
    pub async fn onboarding(
        &self,
        api_key: Option<String>,
        user_responses: &serde_json::Value,
    ) -> Result<String, AppError> {
        let key = self.resolve_key(api_key)?;
        let prompt = prompt::onboarding(user_responses)?;

        Ok(self.client.generate(&key, &prompt).await?)
    }

    /// Suggests today's priorities from profile, today's tasks and recent history
    pub async fn daily_suggestion(
        &self,
        user_id: i32,
        api_key: Option<String>,
        today: NaiveDate,
    ) -> Result<String, AppError> {
        let key = self.resolve_key(api_key)?;

        let task_repo = TaskRepository::new(self.db);
        let profile = ProfileRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?;
        let today_tasks = task_repo.get_by_date(user_id, today).await?;
        let recent_tasks = task_repo
            .get_since(user_id, days_before(today, RECENT_DAYS))
            .await?;
        let streak_days = StreakRepository::new(self.db)
            .count_since(user_id, days_before(today, STREAK_WINDOW_DAYS))
            .await?;

        let prompt = prompt::daily_suggestion(prompt::DailyContext {
            profile,
            today_tasks,
            recent_days: prompt::activity_by_day(&recent_tasks),
            streak_days,
        })?;

        Ok(self.client.generate(&key, &prompt).await?)
    }

    /// Assesses the last week's per-category performance
    pub async fn weekly_insight(
        &self,
        user_id: i32,
        api_key: Option<String>,
        today: NaiveDate,
    ) -> Result<String, AppError> {
        let key = self.resolve_key(api_key)?;

        let tasks = TaskRepository::new(self.db)
            .get_since(user_id, days_before(today, RECENT_DAYS))
            .await?;
        let prompt = prompt::weekly_insight(&prompt::category_performance(&tasks))?;

        Ok(self.client.generate(&key, &prompt).await?)
    }

    /// Answers a free-form productivity question
    pub async fn chat(
        &self,
        api_key: Option<String>,
        message: Option<String>,
    ) -> Result<String, AppError> {
        let key = self.resolve_key(api_key)?;
        let message = message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| AppError::BadRequest("Message is required".to_string()))?;

        Ok(self.client.generate(&key, &prompt::chat(&message)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;
    use url::Url;

    fn client() -> GeminiClient {
        GeminiClient::new(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/v1beta").unwrap(),
            "gemini-pro".to_string(),
        )
    }

    /// Expected: the request key wins over the server key
    #[tokio::test]
    async fn prefers_request_key() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let client = client();
        let server_key = SecretString::from("server".to_string());

        let service = AiService::new(db, &client, Some(&server_key));

        let key = service.resolve_key(Some("caller".to_string())).unwrap();
        assert_eq!(key.expose_secret(), "caller");

        let key = service.resolve_key(Some("  ".to_string())).unwrap();
        assert_eq!(key.expose_secret(), "server");
    }

    /// Expected: Err(BadRequest) before any network call when no key exists
    #[tokio::test]
    async fn requires_some_key() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let client = client();

        let service = AiService::new(db, &client, None);

        let result = service.chat(None, Some("hi".to_string())).await;
        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "AI API key is required"));
    }

    /// Expected: Err(BadRequest) for a chat without a message
    #[tokio::test]
    async fn chat_requires_message() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let client = client();

        let service = AiService::new(db, &client, None);

        let result = service.chat(Some("key".to_string()), None).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use url::Url;

use crate::server::{
    router::router,
    service::{
        ai::client::GeminiClient,
        auth::{password::hash_password, token::TokenService},
    },
    state::AppState,
};

mod analytics;

const USERNAME: &str = "student";
const PASSWORD: &str = "correct horse";

/// Router wired to an in-memory database with one seeded account.
struct TestApp {
    app: Router,
    db: DatabaseConnection,
    user_id: i32,
    tokens: TokenService,
    _test: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_tracker_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let user = factory::user::UserFactory::new(&db)
            .username(USERNAME)
            .password_hash(hash_password(PASSWORD).unwrap())
            .build()
            .await
            .unwrap();

        let tokens = TokenService::new("router-test-secret".to_string().into());
        let ai_client = GeminiClient::new(
            reqwest::Client::new(),
            Url::parse("http://127.0.0.1:9/v1beta").unwrap(),
            "gemini-pro".to_string(),
        );

        let app = router().with_state(AppState::new(
            db.clone(),
            tokens.clone(),
            ai_client,
            None,
            USERNAME.to_string(),
        ));

        Self {
            app,
            db,
            user_id: user.id,
            tokens,
            _test: test,
        }
    }

    fn token(&self) -> String {
        self.tokens.issue(self.user_id).unwrap()
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(&self.token()), None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(&self.token()), Some(body))
            .await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(&self.token()), Some(body))
            .await
    }
}

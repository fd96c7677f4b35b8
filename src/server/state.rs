//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying bearer tokens
//! - AI client and the optional server-held AI key
//! - The username that password login authenticates as

use sea_orm::DatabaseConnection;
use secrecy::SecretString;
use std::sync::Arc;

use super::service::{ai::client::GeminiClient, auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` keeps its secret behind an `Arc`
/// - `GeminiClient` wraps a `reqwest::Client`, which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues tokens at login and verifies them in the auth guard.
    pub tokens: TokenService,

    /// Client for the generative AI endpoint.
    pub ai_client: GeminiClient,

    /// Server-held AI key used when a request does not bring its own.
    pub ai_api_key: Option<Arc<SecretString>>,

    /// Account that password login authenticates as.
    pub login_username: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the signing secret
    /// - `ai_client` - Generative AI client
    /// - `ai_api_key` - Optional server-held AI key
    /// - `login_username` - Username of the single account
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        ai_client: GeminiClient,
        ai_api_key: Option<SecretString>,
        login_username: String,
    ) -> Self {
        Self {
            db,
            tokens,
            ai_client,
            ai_api_key: ai_api_key.map(Arc::new),
            login_username,
        }
    }
}

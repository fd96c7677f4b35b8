use secrecy::ExposeSecret;

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        ai::client::GeminiClient,
        auth::{token::TokenService, AuthService},
    },
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations to ensure the database schema is
/// up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured login account if it does not exist yet.
///
/// An existing account keeps its stored password even if `DEFAULT_PASSWORD` changed.
///
/// # Arguments
/// - `db` - Migrated database connection
/// - `config` - Configuration holding the default username and password
/// - `tokens` - Token service, required by `AuthService`
pub async fn seed_default_user(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    tokens: &TokenService,
) -> Result<(), AppError> {
    let auth_service = AuthService::new(db, tokens);

    let (user, created) = auth_service
        .ensure_user(
            &config.default_username,
            config.default_password.expose_secret(),
        )
        .await?;

    if created {
        tracing::info!("Created default user '{}' (id {})", user.username, user.id);
    } else {
        tracing::info!("Default user '{}' already exists", user.username);
    }

    Ok(())
}

/// Builds the token service from the configured secret, generating one if unset.
pub fn setup_token_service(config: &Config) -> TokenService {
    match &config.jwt_secret {
        Some(secret) => TokenService::new(secret.expose_secret().to_string().into()),
        None => {
            tracing::warn!(
                "JWT_SECRET is not set; using a generated secret. Issued tokens will not survive a restart"
            );
            TokenService::new(TokenService::generate_secret())
        }
    }
}

/// Builds the AI client with the configured endpoint, model and request timeout.
///
/// # Returns
/// - `Ok(GeminiClient)` - Client ready for use
/// - `Err(AppError::ConfigErr)` - `GEMINI_API_URL` is not a valid URL
/// - `Err(AppError::ReqwestErr)` - HTTP client could not be built
pub fn setup_ai_client(config: &Config) -> Result<GeminiClient, AppError> {
    use crate::server::error::config::ConfigError;

    let base_url =
        url::Url::parse(&config.gemini_api_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "GEMINI_API_URL".to_string(),
            reason: e.to_string(),
        })?;

    let http_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.ai_timeout_secs))
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(GeminiClient::new(
        http_client,
        base_url,
        config.gemini_model.clone(),
    ))
}

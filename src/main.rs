//! Academy CMS - Content management backend for a coaching institute website
//!
//! Serves the admin console API behind a cookie-based authorization gate and
//! read-only content endpoints for the public site.

use sqlx::sqlite::SqlitePool;
use tokio::net::TcpListener;

mod api;
mod auth;
mod config;
mod domain;
mod error;
mod logging;
mod storage;

use crate::api::handlers::AuthState;
use crate::api::build_router;
use crate::auth::{AdminGate, CredentialIssuer, GatePolicy, TokenService};
use crate::config::Config;
use crate::domain::Principal;
use crate::storage::CmsRepository;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database repository.
    pub repository: CmsRepository,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Initialize logging
    logging::init();

    tracing::info!("Starting Academy CMS v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // Refuse to start on an unusable signing secret or gate layout rather
    // than limping along with a guessable default.
    config.validate().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.url,
        admin_root = %config.gate.admin_root,
        "Configuration loaded"
    );

    // Connect to database
    let pool = SqlitePool::connect(&config.database.url)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            anyhow::anyhow!("Database connection error: {}", e)
        })?;

    // Initialize repository and schema
    let repository = CmsRepository::new(pool);
    repository.init_schema().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to initialize database schema");
        anyhow::anyhow!("Schema initialization error: {}", e)
    })?;

    tracing::info!("Database connected and schema initialized");

    // Seed the configured admin principal if it is not already present
    if let (Some(email), Some(hash)) = (
        config.auth.admin_email.clone(),
        config.auth.admin_password_hash.clone(),
    ) {
        if repository.find_principal_by_email(&email).await?.is_none() {
            let principal = Principal::new(email.clone(), "Administrator".to_string(), hash);
            repository.create_principal(&principal).await?;
            tracing::info!(email = %email, "Seeded admin principal");
        }
    } else {
        tracing::warn!("No admin principal configured; logins will fail until one is created");
    }

    // Build authentication components
    let tokens = TokenService::new(
        &config.auth.jwt_secret,
        config.auth.jwt_issuer.clone(),
        config.auth.token_ttl_hours,
    );
    let issuer = CredentialIssuer::new(repository.clone(), tokens.clone());
    let gate = AdminGate::new(
        GatePolicy::new(
            config.gate.admin_root.clone(),
            config.gate.login_path(),
            config.auth.cookie_name.clone(),
        ),
        tokens,
    );
    let auth_state = AuthState {
        issuer,
        cookie_name: config.auth.cookie_name.clone(),
    };

    // Build application state
    let state = AppState { repository };

    // Build router
    let app = build_router(state, auth_state, gate);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

//! CLI command definitions and dispatch.

pub mod admin;
pub mod app;
pub mod migrate;
pub mod token;
pub mod user;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use sso_auth::Authenticator;
use sso_core::config::AppConfig;
use sso_core::error::AppError;
use sso_database::{AppRepository, DatabasePool, UserRepository};

/// SSO identity service
#[derive(Debug, Parser)]
#[command(name = "sso", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "CONFIG_PATH", default_value = "config/local.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User registration and login
    User(user::UserArgs),
    /// Admin checks
    Admin(admin::AdminArgs),
    /// Client app management
    App(app::AppArgs),
    /// Session token inspection
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command against an opened database.
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        let db = DatabasePool::connect(&config.database).await?;
        let ctx = Context {
            config,
            db,
            format: self.format,
        };

        let result = match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &ctx).await,
            Commands::User(args) => user::execute(args, &ctx).await,
            Commands::Admin(args) => admin::execute(args, &ctx).await,
            Commands::App(args) => app::execute(args, &ctx).await,
            Commands::Token(args) => token::execute(args, &ctx).await,
        };

        ctx.db.close().await;
        result
    }
}

/// Shared state handed to every command.
pub struct Context {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Open database pool.
    pub db: DatabasePool,
    /// Selected output format.
    pub format: OutputFormat,
}

impl Context {
    /// Build an authenticator backed by the SQLite repositories.
    pub fn authenticator(&self) -> Authenticator {
        let users = Arc::new(UserRepository::new(self.db.pool().clone()));
        let apps = Arc::new(AppRepository::new(self.db.pool().clone()));

        Authenticator::new(users.clone(), users, apps, self.config.auth.token_ttl())
    }

    /// Run a core call under the configured request timeout.
    pub async fn with_deadline<T, E, F>(&self, op: &str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<AppError>,
    {
        with_deadline(self.config.auth.request_timeout(), op, fut).await
    }
}

/// Await `fut` for at most `limit`. On expiry the future is dropped, which
/// cancels its in-flight storage calls.
pub async fn with_deadline<T, E, F>(limit: Duration, op: &str, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    E: Into<AppError>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(Into::into),
        Err(_) => {
            tracing::warn!(op, timeout_ms = limit.as_millis() as u64, "Request deadline exceeded");
            Err(AppError::timeout(format!(
                "{op} did not finish within {}ms",
                limit.as_millis()
            )))
        }
    }
}

/// Read a password from the command line argument or prompt for it without echo.
pub fn read_password(given: Option<&str>, confirm: bool) -> Result<String, AppError> {
    if let Some(p) = given {
        return Ok(p.to_string());
    }

    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
    }

    prompt
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}

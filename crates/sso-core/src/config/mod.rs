//! Application configuration schemas.
//!
//! Configuration is deserialized from a TOML file via the `config` crate and
//! overlaid with environment variables prefixed with `SSO` (sections are
//! separated by `__`, e.g. `SSO__AUTH__TOKEN_TTL_SECONDS=600`).

pub mod auth;
pub mod database;
pub mod logging;

use config::ConfigBuilder;
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};

pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "SSO";

/// Longest accepted token lifetime (ten years).
const MAX_TOKEN_TTL_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment name (`local`, `dev`, `prod`).
    #[serde(default = "default_env")]
    pub env: String,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Token and request settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file plus `SSO__*` environment overrides.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app_config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject values that deserialize fine but cannot work at runtime.
    fn validate(&self) -> Result<(), AppError> {
        if self.database.path.trim().is_empty() {
            return Err(AppError::configuration("database.path must not be empty"));
        }
        if self.auth.token_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "auth.token_ttl_seconds must be greater than zero",
            ));
        }
        if self.auth.token_ttl_seconds > MAX_TOKEN_TTL_SECONDS {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_seconds must not exceed {MAX_TOKEN_TTL_SECONDS}"
            )));
        }
        if self.auth.request_timeout_seconds == 0 {
            return Err(AppError::configuration(
                "auth.request_timeout_seconds must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn default_env() -> String {
    "local".to_string()
}

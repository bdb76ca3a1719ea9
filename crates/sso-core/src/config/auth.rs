//! Authentication configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Token issuance and request deadline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Lifetime of issued session tokens in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
    /// Deadline for a single authenticator call, storage included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl AuthConfig {
    /// Token time-to-live as a [`Duration`].
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_seconds)
    }

    /// Per-request deadline as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_seconds: default_token_ttl(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_request_timeout() -> u64 {
    5
}

//! Session token creation.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};

use sso_core::error::AppError;
use sso_entity::{App, User};

use super::claims::Claims;

/// Creates HS256 session tokens signed with the target app's secret.
#[derive(Debug, Clone)]
pub struct JwtEncoder {
    /// Lifetime of every issued token.
    token_ttl: Duration,
}

impl JwtEncoder {
    /// Creates a new encoder issuing tokens valid for `token_ttl`.
    pub fn new(token_ttl: Duration) -> Self {
        Self { token_ttl }
    }

    /// Issues a signed token for `user`, scoped to `app`.
    pub fn issue(&self, user: &User, app: &App) -> Result<String, AppError> {
        let ttl = chrono::Duration::from_std(self.token_ttl)
            .map_err(|e| AppError::internal(format!("Token TTL out of range: {e}")))?;
        let exp = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal("Token expiry out of range"))?;

        let claims = Claims {
            uid: user.id,
            app_id: app.id,
            exp: exp.timestamp(),
            email: user.email.clone(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(app.secret.as_bytes()),
        )
        .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }
}

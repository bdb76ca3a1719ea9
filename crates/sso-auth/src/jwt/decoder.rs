//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use sso_core::error::{AppError, ErrorKind};

use super::claims::Claims;
use crate::provider::{AppProvider, StorageError};

/// Verifies session tokens against the secret of the app they name.
#[derive(Debug, Clone)]
pub struct JwtDecoder {
    /// Validation applied once the signing app is known.
    validation: Validation,
}

/// Only the claim needed to pick the verification key.
#[derive(Deserialize)]
struct AppClaim {
    app_id: i32,
}

impl JwtDecoder {
    /// Creates a decoder that accepts HS256 tokens up to their expiry instant.
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self { validation }
    }

    /// Decodes and validates a token.
    ///
    /// Checks:
    /// 1. The `app_id` claim names an existing app
    /// 2. Signature validity under that app's secret
    /// 3. Expiration
    pub async fn verify(&self, token: &str, apps: &dyn AppProvider) -> Result<Claims, AppError> {
        let app_id = self.peek_app_id(token)?;

        let app = apps.app(app_id).await.map_err(|e| match e {
            StorageError::NotFound => AppError::authentication("Token issued for an unknown app"),
            other => AppError::with_source(ErrorKind::Internal, "Failed to resolve token app", other),
        })?;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(app.secret.as_bytes()),
            &self.validation,
        )
        .map_err(map_jwt_error)?;

        // jsonwebtoken still accepts `exp == now` with zero leeway.
        if token_data.claims.is_expired() {
            return Err(AppError::authentication("Token has expired"));
        }

        Ok(token_data.claims)
    }

    /// Reads the `app_id` claim without checking the signature.
    fn peek_app_id(&self, token: &str) -> Result<i32, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<AppClaim>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims.app_id)
            .map_err(map_jwt_error)
    }
}

impl Default for JwtDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn map_jwt_error(e: jsonwebtoken::errors::Error) -> AppError {
    match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::authentication("Token has expired")
        }
        jsonwebtoken::errors::ErrorKind::InvalidToken => {
            AppError::authentication("Invalid token format")
        }
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::authentication("Invalid token signature")
        }
        _ => AppError::authentication(format!("Token validation failed: {e}")),
    }
}

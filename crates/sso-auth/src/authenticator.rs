//! Login, registration, and admin checks.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::error::{AuthError, Step, op, translate};
use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;
use crate::provider::{AppProvider, StorageError, UserProvider, UserSaver};

/// Authentication workflow over injected storage capabilities.
///
/// Every call goes straight to storage: nothing is cached and nothing is
/// retried. Dropping a returned future cancels the storage calls it has in
/// flight, so callers bound each operation with their own deadline.
pub struct Authenticator {
    /// Persists new users.
    user_saver: Arc<dyn UserSaver>,
    /// Looks up users and admin flags.
    user_provider: Arc<dyn UserProvider>,
    /// Looks up apps and their signing secrets.
    app_provider: Arc<dyn AppProvider>,
    /// Argon2id hasher.
    hasher: PasswordHasher,
    /// Session token issuer.
    encoder: JwtEncoder,
}

impl Authenticator {
    /// Creates an authenticator issuing tokens valid for `token_ttl`.
    pub fn new(
        user_saver: Arc<dyn UserSaver>,
        user_provider: Arc<dyn UserProvider>,
        app_provider: Arc<dyn AppProvider>,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(token_ttl),
        }
    }

    /// Checks credentials and returns a session token for `app_id`.
    ///
    /// An unknown email and a wrong password both fail with
    /// [`AuthError::InvalidCredentials`]. An unknown app is an internal error.
    pub async fn login(&self, email: &str, password: &str, app_id: i32) -> Result<String, AuthError> {
        info!(op = op::LOGIN, email, "attempting to login user");

        let user = self.user_provider.user(email).await.map_err(|e| {
            match &e {
                StorageError::NotFound => warn!(op = op::LOGIN, email, "user not found"),
                _ => error!(op = op::LOGIN, email, error = %e, "failed to get user"),
            }
            translate(Step::FindUser, e)
        })?;

        let valid = self
            .hasher
            .verify_password(password, &user.pass_hash)
            .map_err(|e| {
                error!(op = op::LOGIN, user_id = user.id, error = %e, "failed to verify password");
                AuthError::internal(op::LOGIN, e)
            })?;
        if !valid {
            info!(op = op::LOGIN, email, "invalid password");
            return Err(AuthError::InvalidCredentials);
        }

        let app = self.app_provider.app(app_id).await.map_err(|e| {
            error!(op = op::LOGIN, app_id, error = %e, "failed to get app");
            translate(Step::FindApp, e)
        })?;

        info!(op = op::LOGIN, user_id = user.id, app_id, "user logged in successfully");

        self.encoder.issue(&user, &app).map_err(|e| {
            error!(op = op::LOGIN, user_id = user.id, app_id, error = %e, "failed to create token");
            AuthError::internal(op::LOGIN, e)
        })
    }

    /// Registers a new user and returns the assigned ID.
    pub async fn register(&self, email: &str, password: &str) -> Result<i64, AuthError> {
        info!(op = op::REGISTER, email, "registering new user");

        let pass_hash = self.hasher.hash_password(password).map_err(|e| {
            error!(op = op::REGISTER, email, error = %e, "failed to hash password");
            AuthError::internal(op::REGISTER, e)
        })?;

        let id = self
            .user_saver
            .save_user(email, &pass_hash)
            .await
            .map_err(|e| {
                match &e {
                    StorageError::AlreadyExists => {
                        warn!(op = op::REGISTER, email, "user already exists")
                    }
                    _ => error!(op = op::REGISTER, email, error = %e, "failed to save user"),
                }
                translate(Step::SaveUser, e)
            })?;

        info!(op = op::REGISTER, user_id = id, "user registered successfully");

        Ok(id)
    }

    /// Reports whether the user is an administrator.
    ///
    /// An unknown user fails with [`AuthError::InvalidAppId`].
    pub async fn is_admin(&self, user_id: i64) -> Result<bool, AuthError> {
        info!(op = op::IS_ADMIN, user_id, "checking if user is admin");

        let is_admin = self.user_provider.is_admin(user_id).await.map_err(|e| {
            match &e {
                StorageError::NotFound => warn!(op = op::IS_ADMIN, user_id, "user not found"),
                _ => error!(op = op::IS_ADMIN, user_id, error = %e, "failed to check admin"),
            }
            translate(Step::CheckAdmin, e)
        })?;

        info!(op = op::IS_ADMIN, user_id, is_admin, "checked if user is admin");

        Ok(is_admin)
    }
}

//! Storage capabilities consumed by the authenticator.
//!
//! Each trait exposes exactly the calls the authenticator makes. Implementations
//! are built once at startup and shared as `Arc<dyn …>`; they must be safe to
//! call from many requests at once and must enforce email uniqueness
//! atomically on save.

use async_trait::async_trait;
use thiserror::Error;

use sso_entity::{App, User};

/// Boxed error used as an opaque failure cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome vocabulary shared by all storage capabilities.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record matches the lookup key.
    #[error("record not found")]
    NotFound,
    /// A record with the same unique key already exists.
    #[error("record already exists")]
    AlreadyExists,
    /// Any other storage failure.
    #[error("storage failure: {0}")]
    Other(#[source] BoxError),
}

impl StorageError {
    /// Wrap an arbitrary backend error as [`StorageError::Other`].
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Box::new(err))
    }
}

/// Persists new users.
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Store a user and return its newly assigned ID.
    ///
    /// Fails with [`StorageError::AlreadyExists`] when the email is taken.
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<i64, StorageError>;
}

/// Reads users and their admin flag.
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Find a user by exact email.
    async fn user(&self, email: &str) -> Result<User, StorageError>;

    /// Whether the user with the given ID is an administrator.
    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError>;
}

/// Reads client applications.
#[async_trait]
pub trait AppProvider: Send + Sync {
    /// Find an application by ID.
    async fn app(&self, app_id: i32) -> Result<App, StorageError>;
}

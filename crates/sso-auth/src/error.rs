//! Caller-facing authentication errors.
//!
//! Storage outcomes never cross the authenticator boundary as-is. Every
//! failure is translated through [`translate`], a single table keyed by the
//! step that failed and the storage outcome it reported.

use thiserror::Error;

use sso_core::error::{AppError, ErrorKind};

use crate::provider::{BoxError, StorageError};

/// Operation names attached to internal errors and log records.
pub mod op {
    /// Login flow.
    pub const LOGIN: &str = "auth.login";
    /// Registration flow.
    pub const REGISTER: &str = "auth.register";
    /// Admin check.
    pub const IS_ADMIN: &str = "auth.is_admin";
}

/// Errors returned by [`Authenticator`](crate::Authenticator) operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Invalid application ID. Also reported for an unknown user during an
    /// admin check.
    #[error("invalid app id")]
    InvalidAppId,
    /// Registration hit an email that is already taken.
    #[error("user already exists")]
    UserExists,
    /// Any other storage or cryptographic failure.
    #[error("{op}: {source}")]
    Internal {
        /// Operation that failed.
        op: &'static str,
        /// Underlying cause. Never carries passwords, hashes, or secrets.
        #[source]
        source: BoxError,
    },
}

impl AuthError {
    /// Wrap an unclassified failure for the given operation.
    pub fn internal(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            op,
            source: source.into(),
        }
    }
}

/// Storage call sites inside the authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// User lookup by email during login.
    FindUser,
    /// App lookup by ID during login.
    FindApp,
    /// User insert during registration.
    SaveUser,
    /// Admin flag lookup.
    CheckAdmin,
}

impl Step {
    /// Operation this step belongs to.
    pub fn op(self) -> &'static str {
        match self {
            Self::FindUser | Self::FindApp => op::LOGIN,
            Self::SaveUser => op::REGISTER,
            Self::CheckAdmin => op::IS_ADMIN,
        }
    }
}

/// Translate a storage outcome into the caller-facing error for a step.
///
/// | step       | NotFound           | AlreadyExists | Other    |
/// |------------|--------------------|---------------|----------|
/// | FindUser   | InvalidCredentials | Internal      | Internal |
/// | FindApp    | Internal           | Internal      | Internal |
/// | SaveUser   | Internal           | UserExists    | Internal |
/// | CheckAdmin | InvalidAppId       | Internal      | Internal |
///
/// A missing app during login is an internal error, while a missing user
/// during an admin check reports `InvalidAppId`. Existing clients depend on
/// both mappings.
pub fn translate(step: Step, err: StorageError) -> AuthError {
    match (step, err) {
        (Step::FindUser, StorageError::NotFound) => AuthError::InvalidCredentials,
        (Step::SaveUser, StorageError::AlreadyExists) => AuthError::UserExists,
        (Step::CheckAdmin, StorageError::NotFound) => AuthError::InvalidAppId,
        (step, err) => AuthError::internal(step.op(), err),
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::new(ErrorKind::Authentication, err.to_string()),
            AuthError::InvalidAppId => Self::new(ErrorKind::Validation, err.to_string()),
            AuthError::UserExists => Self::new(ErrorKind::Conflict, err.to_string()),
            AuthError::Internal { .. } => {
                let message = err.to_string();
                Self::with_source(ErrorKind::Internal, message, err)
            }
        }
    }
}

//! Convenience result type alias for the SSO service.

use crate::error::AppError;

/// A specialized `Result` type for SSO operations.
pub type AppResult<T> = Result<T, AppError>;

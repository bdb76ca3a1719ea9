//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique email address, compared byte for byte.
    pub email: String,
    /// Salted one-way password hash (PHC string bytes).
    #[serde(skip_serializing, default)]
    pub pass_hash: Vec<u8>,
}

//! Session token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload embedded in every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user ID.
    pub uid: i64,
    /// ID of the app the token was issued for. Selects the verification key.
    pub app_id: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Email of the subject user.
    pub email: String,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`, or `None` when `exp` is
    /// outside the representable range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

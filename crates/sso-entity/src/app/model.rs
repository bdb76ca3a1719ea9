//! Client application model.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An application that session tokens are issued for.
///
/// The secret is the HMAC signing key for that application's tokens. It is
/// skipped on serialization and redacted from `Debug` output.
#[derive(Clone, Serialize, Deserialize, FromRow)]
pub struct App {
    /// Unique application identifier.
    pub id: i32,
    /// Unique application name.
    pub name: String,
    /// Token signing secret.
    #[serde(skip_serializing, default)]
    pub secret: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App {
            id: 1,
            name: "web".to_string(),
            secret: "super-secret-key".to_string(),
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", app());
        assert!(rendered.contains("web"));
        assert!(!rendered.contains("super-secret-key"));
    }

    #[test]
    fn test_secret_not_serialized() {
        let json = serde_json::to_string(&app()).unwrap();
        assert!(!json.contains("super-secret-key"));
        assert!(!json.contains("secret"));
    }
}

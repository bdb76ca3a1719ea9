//! # sso-auth
//!
//! Authentication core for the SSO service.
//!
//! ## Modules
//!
//! - `authenticator`: login, registration, and admin checks over injected storage
//! - `provider`: narrow storage capability traits consumed by the authenticator
//! - `error`: caller-facing error kinds and the storage error translation table
//! - `jwt`: per-app HS256 session token issuance and verification
//! - `password`: Argon2id password hashing

pub mod authenticator;
pub mod error;
pub mod jwt;
pub mod password;
pub mod provider;

pub use authenticator::Authenticator;
pub use error::AuthError;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use provider::{AppProvider, StorageError, UserProvider, UserSaver};

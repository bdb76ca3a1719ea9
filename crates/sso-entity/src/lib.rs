//! # sso-entity
//!
//! Domain entity models for the SSO service. Every struct here mirrors a
//! database table row and derives `sqlx::FromRow`.

pub mod app;
pub mod user;

pub use app::App;
pub use user::User;

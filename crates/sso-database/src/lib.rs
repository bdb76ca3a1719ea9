//! # sso-database
//!
//! SQLite connection management, embedded migrations, and repository
//! implementations of the storage capabilities consumed by `sso-auth`.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use migration::run_migrations;
pub use repositories::{AppRepository, UserRepository};

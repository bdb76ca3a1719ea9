//! Repository implementations for users and apps.

pub mod app;
pub mod user;

pub use app::AppRepository;
pub use user::UserRepository;

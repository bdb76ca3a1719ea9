//! In-memory storage fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use sso_auth::{AppProvider, Authenticator, StorageError, UserProvider, UserSaver};
use sso_entity::{App, User};

/// TTL used by every test authenticator.
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Secret of the app seeded by [`MemoryStore::seeded`].
pub const APP_SECRET: &str = "test-app-secret";

#[derive(Default)]
struct Inner {
    users: Vec<(User, bool)>,
    apps: HashMap<i32, App>,
}

/// Thread-safe store implementing all three capabilities.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Store holding a single app with ID 1.
    pub fn seeded() -> Arc<Self> {
        let store = Self::default();
        store.add_app(1, "test", APP_SECRET);
        Arc::new(store)
    }

    pub fn add_app(&self, id: i32, name: &str, secret: &str) {
        self.inner.lock().unwrap().apps.insert(
            id,
            App {
                id,
                name: name.to_string(),
                secret: secret.to_string(),
            },
        );
    }

    pub fn set_admin(&self, user_id: i64) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(entry) = inner.users.iter_mut().find(|(u, _)| u.id == user_id) {
            entry.1 = true;
        }
    }

    pub fn stored_hash(&self, email: &str) -> Option<Vec<u8>> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.pass_hash.clone())
    }
}

#[async_trait]
impl UserSaver for MemoryStore {
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<i64, StorageError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|(u, _)| u.email == email) {
            return Err(StorageError::AlreadyExists);
        }
        let id = inner.users.len() as i64 + 1;
        inner.users.push((
            User {
                id,
                email: email.to_string(),
                pass_hash: pass_hash.to_vec(),
            },
            false,
        ));
        Ok(id)
    }
}

#[async_trait]
impl UserProvider for MemoryStore {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone())
            .ok_or(StorageError::NotFound)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(_, admin)| *admin)
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl AppProvider for MemoryStore {
    async fn app(&self, app_id: i32) -> Result<App, StorageError> {
        let inner = self.inner.lock().unwrap();
        inner.apps.get(&app_id).cloned().ok_or(StorageError::NotFound)
    }
}

/// Store whose every call fails with an unclassified error.
pub struct BrokenStore;

fn broken() -> StorageError {
    StorageError::other(std::io::Error::other("database is locked"))
}

#[async_trait]
impl UserSaver for BrokenStore {
    async fn save_user(&self, _email: &str, _pass_hash: &[u8]) -> Result<i64, StorageError> {
        Err(broken())
    }
}

#[async_trait]
impl UserProvider for BrokenStore {
    async fn user(&self, _email: &str) -> Result<User, StorageError> {
        Err(broken())
    }

    async fn is_admin(&self, _user_id: i64) -> Result<bool, StorageError> {
        Err(broken())
    }
}

#[async_trait]
impl AppProvider for BrokenStore {
    async fn app(&self, _app_id: i32) -> Result<App, StorageError> {
        Err(broken())
    }
}

/// Authenticator whose three capabilities are all backed by `store`.
pub fn authenticator(store: &Arc<MemoryStore>) -> Authenticator {
    Authenticator::new(store.clone(), store.clone(), store.clone(), TOKEN_TTL)
}

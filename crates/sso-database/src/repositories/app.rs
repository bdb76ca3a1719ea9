//! App repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use sso_auth::provider::{AppProvider, StorageError};
use sso_core::error::{AppError, ErrorKind};
use sso_core::result::AppResult;
use sso_entity::App;

/// Repository for client applications.
#[derive(Debug, Clone)]
pub struct AppRepository {
    pool: SqlitePool,
}

impl AppRepository {
    /// Create a new app repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new app and return it.
    pub async fn create(&self, name: &str, secret: &str) -> AppResult<App> {
        let result = sqlx::query("INSERT INTO apps (name, secret) VALUES (?, ?)")
            .bind(name)
            .bind(secret)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    AppError::conflict(format!("App '{name}' already exists"))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create app", e),
            })?;

        let id = i32::try_from(result.last_insert_rowid())
            .map_err(|_| AppError::database("App ID out of range"))?;

        Ok(App {
            id,
            name: name.to_string(),
            secret: secret.to_string(),
        })
    }

    /// List all apps ordered by ID.
    pub async fn list(&self) -> AppResult<Vec<App>> {
        sqlx::query_as::<_, App>("SELECT id, name, secret FROM apps ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list apps", e))
    }
}

#[async_trait]
impl AppProvider for AppRepository {
    async fn app(&self, app_id: i32) -> Result<App, StorageError> {
        sqlx::query_as::<_, App>("SELECT id, name, secret FROM apps WHERE id = ?")
            .bind(app_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::other)?
            .ok_or(StorageError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = AppRepository::new(memory_pool().await);

        let created = repo.create("web", "web-secret").await.unwrap();
        let found = repo.app(created.id).await.unwrap();

        assert_eq!(found.name, "web");
        assert_eq!(found.secret, "web-secret");
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let repo = AppRepository::new(memory_pool().await);

        repo.create("web", "s1").await.unwrap();
        let err = repo.create("web", "s2").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_missing_app_not_found() {
        let repo = AppRepository::new(memory_pool().await);

        let err = repo.app(42).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn test_list_ordered() {
        let repo = AppRepository::new(memory_pool().await);

        repo.create("web", "s1").await.unwrap();
        repo.create("mobile", "s2").await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["web".to_string(), "mobile".to_string()]);
    }
}

//! User repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use sso_auth::provider::{StorageError, UserProvider, UserSaver};
use sso_entity::User;

/// Repository for user inserts and lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserSaver for UserRepository {
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO users (email, pass_hash) VALUES (?, ?)")
            .bind(email)
            .bind(pass_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    StorageError::AlreadyExists
                }
                _ => StorageError::other(e),
            })?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait]
impl UserProvider for UserRepository {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        sqlx::query_as::<_, User>("SELECT id, email, pass_hash FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::other)?
            .ok_or(StorageError::NotFound)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError> {
        sqlx::query_scalar::<_, bool>("SELECT is_admin FROM users WHERE id = ?")
            .bind(user_id)
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
    async fn test_save_and_find() {
        let repo = UserRepository::new(memory_pool().await);

        let id = repo.save_user("a@x.com", b"hash-bytes").await.unwrap();
        let user = repo.user("a@x.com").await.unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.pass_hash, b"hash-bytes".to_vec());
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let repo = UserRepository::new(memory_pool().await);

        let first = repo.save_user("a@x.com", b"h1").await.unwrap();
        let second = repo.save_user("b@x.com", b"h2").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_duplicate_email_already_exists() {
        let repo = UserRepository::new(memory_pool().await);

        repo.save_user("a@x.com", b"h1").await.unwrap();
        let err = repo.save_user("a@x.com", b"h2").await.unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists));
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = UserRepository::new(memory_pool().await);

        repo.save_user("A@x.com", b"h1").await.unwrap();
        let err = repo.user("a@x.com").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn test_is_admin() {
        let pool = memory_pool().await;
        let repo = UserRepository::new(pool.clone());

        let id = repo.save_user("a@x.com", b"h1").await.unwrap();
        assert!(!repo.is_admin(id).await.unwrap());

        sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = ?")
            .bind(id)
            .execute(&pool)
            .await
            .unwrap();
        assert!(repo.is_admin(id).await.unwrap());

        let err = repo.is_admin(9999).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn test_closed_pool_is_other() {
        let pool = memory_pool().await;
        let repo = UserRepository::new(pool.clone());
        pool.close().await;

        let err = repo.user("a@x.com").await.unwrap_err();
        assert!(matches!(err, StorageError::Other(_)));
    }
}

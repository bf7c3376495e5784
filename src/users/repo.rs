use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::users::repo_types::{NewUser, User, UserUpdate};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection or query failure; the store could not answer.
    #[error("user store unavailable: {0}")]
    Unavailable(String),
    /// Unique-constraint violation on users.email.
    #[error("write conflict: {0}")]
    WriteConflict(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            if db.is_unique_violation() {
                return StoreError::WriteConflict(db.to_string());
            }
        }
        StoreError::Unavailable(e.to_string())
    }
}

/// Port for user persistence. Callers are handed an instance; there is no
/// ambient global client.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn insert(&self, new: NewUser) -> Result<User, StoreError>;
    async fn update(&self, email: &str, patch: UserUpdate) -> Result<User, StoreError>;
}

/// Postgres-backed store. Emails are expected pre-normalized (lowercase).
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, email, password_hash, name, is_admin, \
                            onboarding_completed, life_expectancy, created_at";

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = $1
            "#
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password_hash, name, is_admin,
                               onboarding_completed, life_expectancy)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(&new.name)
        .bind(new.is_admin)
        .bind(new.onboarding_completed)
        .bind(new.life_expectancy)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update(&self, email: &str, patch: UserUpdate) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            UPDATE users
            SET password_hash = $2, name = $3, is_admin = $4
            WHERE email = $1
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(email)
        .bind(&patch.password_hash)
        .bind(&patch.name)
        .bind(patch.is_admin)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_map_to_unavailable() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Unavailable(_)));

        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}

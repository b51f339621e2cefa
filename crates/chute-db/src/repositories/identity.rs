//! PostgreSQL implementation of the IdentityProvider port
//!
//! Backs the credential store that the managed authentication service
//! provided in the original deployment: account lookup by email, credential
//! provisioning, and password updates. Only "not found" is a signal; every
//! other failure surfaces as an identity-provider error, distinct from
//! validation errors.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chute_core::traits::{IdentityProvider, RepoResult};
use chute_core::DomainError;

fn map_provider_error(e: sqlx::Error) -> DomainError {
    DomainError::IdentityProvider(e.to_string())
}

fn map_provider_unique(e: sqlx::Error) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::EmailAlreadyExists;
        }
    }
    DomainError::IdentityProvider(e.to_string())
}

/// PostgreSQL implementation of IdentityProvider
#[derive(Clone)]
pub struct PgIdentityProvider {
    pool: PgPool,
}

impl PgIdentityProvider {
    /// Create a new PgIdentityProvider
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    #[instrument(skip(self))]
    async fn find_account_by_email(&self, email: &str) -> RepoResult<Option<Uuid>> {
        let result = sqlx::query_scalar::<_, Uuid>(
            r"
            SELECT account_id FROM credentials WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_provider_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create_account(
        &self,
        account_id: Uuid,
        email: &str,
        password_hash: &str,
        must_reset: bool,
    ) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO credentials (account_id, email, password_hash, must_reset, updated_at)
            VALUES ($1, $2, $3, $4, NOW())
            ",
        )
        .bind(account_id)
        .bind(email)
        .bind(password_hash)
        .bind(must_reset)
        .execute(&self.pool)
        .await
        .map_err(map_provider_unique)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn password_hash(&self, account_id: Uuid) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM credentials WHERE account_id = $1
            ",
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_provider_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn set_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
        must_reset: bool,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE credentials
            SET password_hash = $2, must_reset = $3, updated_at = NOW()
            WHERE account_id = $1
            ",
        )
        .bind(account_id)
        .bind(password_hash)
        .bind(must_reset)
        .execute(&self.pool)
        .await
        .map_err(map_provider_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GuardianNotFound(account_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_reset_required(&self, account_id: Uuid) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE credentials
            SET must_reset = TRUE, updated_at = NOW()
            WHERE account_id = $1
            ",
        )
        .bind(account_id)
        .execute(&self.pool)
        .await
        .map_err(map_provider_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GuardianNotFound(account_id));
        }

        Ok(())
    }
}

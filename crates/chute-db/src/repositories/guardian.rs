//! PostgreSQL implementation of GuardianRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chute_core::entities::{Guardian, Role};
use chute_core::traits::{GuardianRepository, RepoResult};
use chute_core::DomainError;

use crate::mappers::guardian_from_row;
use crate::models::GuardianModel;

use super::error::{guardian_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GuardianRepository
#[derive(Clone)]
pub struct PgGuardianRepository {
    pool: PgPool,
}

impl PgGuardianRepository {
    /// Create a new PgGuardianRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuardianRepository for PgGuardianRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Guardian>> {
        let result = sqlx::query_as::<_, GuardianModel>(
            r"
            SELECT id, name, email, phone, role, student_ids, created_at
            FROM guardians
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(guardian_from_row).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Guardian>> {
        let result = sqlx::query_as::<_, GuardianModel>(
            r"
            SELECT id, name, email, phone, role, student_ids, created_at
            FROM guardians
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(guardian_from_row).transpose()
    }

    #[instrument(skip(self))]
    async fn list_by_role(&self, role: Role) -> RepoResult<Vec<Guardian>> {
        let rows = sqlx::query_as::<_, GuardianModel>(
            r"
            SELECT id, name, email, phone, role, student_ids, created_at
            FROM guardians
            WHERE role = $1
            ORDER BY name
            ",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(guardian_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, guardian: &Guardian) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO guardians (id, name, email, phone, role, student_ids, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(guardian.id)
        .bind(&guardian.name)
        .bind(&guardian.email)
        .bind(&guardian.phone)
        .bind(guardian.role.as_str())
        .bind(&guardian.student_ids)
        .bind(guardian.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_contact(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        phone: &str,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE guardians
            SET name = $2, email = $3, phone = $4
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(guardian_not_found(id));
        }

        Ok(())
    }

    // The CASE keeps the statement a no-op when the ID is already present,
    // while still matching the row: rows_affected == 0 means the guardian
    // itself is missing, never "already linked".
    #[instrument(skip(self))]
    async fn add_student_link(&self, guardian_id: Uuid, student_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE guardians
            SET student_ids = CASE
                WHEN student_ids @> ARRAY[$2]::uuid[] THEN student_ids
                ELSE array_append(student_ids, $2)
            END
            WHERE id = $1
            ",
        )
        .bind(guardian_id)
        .bind(student_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove_student_link(&self, guardian_id: Uuid, student_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE guardians
            SET student_ids = array_remove(student_ids, $2)
            WHERE id = $1
            ",
        )
        .bind(guardian_id)
        .bind(student_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

//! PostgreSQL implementation of ChargeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chute_core::entities::Charge;
use chute_core::traits::{BatchOutcome, ChargeRepository, RepoResult};
use chute_core::value_objects::ReferenceMonth;

use crate::mappers::charge_from_row;
use crate::models::ChargeModel;

use super::error::map_db_error;

const INSERT_IF_ABSENT: &str = r"
    INSERT INTO charges (id, student_id, guardian_id, reference_month, amount,
                         status, student_name, guardian_email, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
    ON CONFLICT (student_id, reference_month) DO NOTHING
";

/// PostgreSQL implementation of ChargeRepository
///
/// Duplicate prevention is a conditional write against the
/// (student, reference month) unique key, not a check-then-insert, so two
/// concurrent issuers can never both succeed.
#[derive(Clone)]
pub struct PgChargeRepository {
    pool: PgPool,
}

impl PgChargeRepository {
    /// Create a new PgChargeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChargeRepository for PgChargeRepository {
    #[instrument(skip(self, charge), fields(student_id = %charge.student_id, month = %charge.reference_month))]
    async fn create_if_absent(&self, charge: &Charge) -> RepoResult<bool> {
        let result = sqlx::query(INSERT_IF_ABSENT)
            .bind(charge.id)
            .bind(charge.student_id)
            .bind(charge.guardian_id)
            .bind(charge.reference_month.to_string())
            .bind(charge.amount)
            .bind(charge.status.as_str())
            .bind(&charge.student_name)
            .bind(&charge.guardian_email)
            .bind(charge.created_at)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, charges), fields(staged = charges.len()))]
    async fn create_many_if_absent(&self, charges: &[Charge]) -> RepoResult<BatchOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let mut outcome = BatchOutcome::default();

        for charge in charges {
            let result = sqlx::query(INSERT_IF_ABSENT)
                .bind(charge.id)
                .bind(charge.student_id)
                .bind(charge.guardian_id)
                .bind(charge.reference_month.to_string())
                .bind(charge.amount)
                .bind(charge.status.as_str())
                .bind(&charge.student_name)
                .bind(&charge.guardian_email)
                .bind(charge.created_at)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            if result.rows_affected() > 0 {
                outcome.created += 1;
            } else {
                outcome.skipped += 1;
            }
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(outcome)
    }

    #[instrument(skip(self))]
    async fn list_by_guardian(&self, guardian_id: Uuid) -> RepoResult<Vec<Charge>> {
        let rows = sqlx::query_as::<_, ChargeModel>(
            r"
            SELECT id, student_id, guardian_id, reference_month, amount,
                   status, student_name, guardian_email, created_at
            FROM charges
            WHERE guardian_id = $1
            ORDER BY reference_month DESC, created_at DESC
            ",
        )
        .bind(guardian_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(charge_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn exists(&self, student_id: Uuid, month: ReferenceMonth) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM charges WHERE student_id = $1 AND reference_month = $2
            )
            ",
        )
        .bind(student_id)
        .bind(month.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}

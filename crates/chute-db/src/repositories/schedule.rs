//! PostgreSQL implementation of ScheduleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chute_core::entities::TrainingSlot;
use chute_core::traits::{RepoResult, ScheduleRepository};

use crate::mappers::schedule_from_row;
use crate::models::ScheduleModel;

use super::error::{map_db_error, training_slot_not_found};

/// PostgreSQL implementation of ScheduleRepository
#[derive(Clone)]
pub struct PgScheduleRepository {
    pool: PgPool,
}

impl PgScheduleRepository {
    /// Create a new PgScheduleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PgScheduleRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<TrainingSlot>> {
        let rows = sqlx::query_as::<_, ScheduleModel>(
            r"
            SELECT id, category, weekday, time_range, location, created_at
            FROM schedules
            ORDER BY category, created_at
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(schedule_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, slot: &TrainingSlot) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO schedules (id, category, weekday, time_range, location, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(slot.id)
        .bind(slot.category.as_str())
        .bind(&slot.weekday)
        .bind(&slot.time_range)
        .bind(&slot.location)
        .bind(slot.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(training_slot_not_found(id));
        }

        Ok(())
    }
}

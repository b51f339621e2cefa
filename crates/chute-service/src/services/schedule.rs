//! Training schedule administration
//!
//! Plain CRUD over the weekly training slots; consumed read-only by the
//! dashboards.

use chute_core::{Category, DomainError, TrainingSlot};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{CreateScheduleRequest, OperationMessage, ScheduleResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Training schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all training slots
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ScheduleResponse>> {
        let slots = self.ctx.schedule_repo().list_all().await?;
        Ok(slots.iter().map(ScheduleResponse::from).collect())
    }

    /// Create a training slot
    #[instrument(skip(self, request), fields(category = %request.category))]
    pub async fn create(&self, request: CreateScheduleRequest) -> ServiceResult<ScheduleResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let category = Category::parse(&request.category)
            .map_err(|_| DomainError::InvalidCategory(request.category.clone()))?;

        let slot = TrainingSlot::new(
            Uuid::new_v4(),
            category,
            request.weekday,
            request.time_range,
            request.location,
        );
        self.ctx.schedule_repo().create(&slot).await?;

        info!(slot_id = %slot.id, "training slot created");

        Ok(ScheduleResponse::from(&slot))
    }

    /// Delete a training slot
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<OperationMessage> {
        self.ctx.schedule_repo().delete(id).await?;
        info!(slot_id = %id, "training slot deleted");
        Ok(OperationMessage::new("Horário removido com sucesso!"))
    }
}

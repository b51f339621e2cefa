//! Training schedule handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use chute_service::{CreateScheduleRequest, OperationMessage, ScheduleResponse, ScheduleService};

use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List training slots (visible to any authenticated account)
///
/// GET /horarios
pub async fn list_schedules(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ScheduleResponse>>> {
    let service = ScheduleService::new(state.service_context());
    let slots = service.list().await?;
    Ok(Json(slots))
}

/// Create a training slot
///
/// POST /horarios
pub async fn create_schedule(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateScheduleRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let service = ScheduleService::new(state.service_context());
    let slot = service.create(request).await?;
    Ok(Json(slot))
}

/// Delete a training slot
///
/// DELETE /horarios/:id
pub async fn delete_schedule(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<OperationMessage>> {
    let service = ScheduleService::new(state.service_context());
    let message = service.delete(id).await?;
    Ok(Json(message))
}

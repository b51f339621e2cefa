//! Attendance handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use chute_service::{
    AttendanceHistoryResponse, AttendanceService, OperationMessage, RosterAttendanceRequest,
    SetAttendanceRequest, StudentService,
};

use crate::extractors::{AdminUser, AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Record one attendance flag for one student and date
///
/// POST /alunos/:id/presenca
pub async fn set_attendance(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<SetAttendanceRequest>,
) -> ApiResult<Json<OperationMessage>> {
    let service = AttendanceService::new(state.service_context());
    let message = service
        .set_attendance(id, request.date, request.present)
        .await?;
    Ok(Json(message))
}

/// Mark a whole category roster for one date
///
/// POST /chamada
pub async fn mark_roster(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<RosterAttendanceRequest>,
) -> ApiResult<Json<OperationMessage>> {
    let service = AttendanceService::new(state.service_context());
    let message = service.mark_roster(request).await?;
    Ok(Json(message))
}

/// Attendance history, newest date first.
///
/// GET /alunos/:id/presencas
///
/// Admins see any student; a guardian only their own linked students.
pub async fn attendance_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<AttendanceHistoryResponse>> {
    if !auth.is_admin() {
        let detail = StudentService::new(state.service_context()).get(id).await?;
        if detail.student.guardian_id != auth.account_id {
            return Err(ApiError::AdminRequired);
        }
    }

    let service = AttendanceService::new(state.service_context());
    let history = service.history(id).await?;
    Ok(Json(history))
}

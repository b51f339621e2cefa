//! Registration handler

use axum::{extract::State, Json};
use chute_service::{RegisterStudentGuardianRequest, RegistrationResponse, RegistrationService};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Register a student together with their guardian
///
/// POST /criarResponsavelAluno
pub async fn register_student_guardian(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<RegisterStudentGuardianRequest>,
) -> ApiResult<Json<RegistrationResponse>> {
    let service = RegistrationService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Json(response))
}

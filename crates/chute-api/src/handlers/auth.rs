//! Authentication handlers

use axum::{extract::State, Json};
use chute_service::{
    AuthService, CreateAdminRequest, GuardianResponse, LoginRequest, LoginResponse,
    OperationMessage, ResetPasswordRequest,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Request a password reset (never reveals whether the email exists)
///
/// POST /auth/redefinirSenha
pub async fn request_password_reset(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<OperationMessage>> {
    let service = AuthService::new(state.service_context());
    let message = service.request_password_reset(request).await?;
    Ok(Json(message))
}

/// Create an administrator account
///
/// POST /admin/criarAdmin
pub async fn create_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateAdminRequest>,
) -> ApiResult<Json<GuardianResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.create_admin(request).await?;
    Ok(Json(response))
}

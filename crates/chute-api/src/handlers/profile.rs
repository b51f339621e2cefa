//! Authenticated-account handlers (guardian dashboard)

use axum::{extract::State, Json};
use chute_service::{AuthService, BillingService, ChargeResponse, ProfileResponse};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Own profile with linked students
///
/// GET /me
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = AuthService::new(state.service_context());
    let profile = service.profile(auth.account_id).await?;
    Ok(Json(profile))
}

/// Own charges, newest month first
///
/// GET /me/pagamentos
pub async fn get_own_charges(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ChargeResponse>>> {
    let service = BillingService::new(state.service_context());
    let charges = service.charges_for_guardian(auth.account_id).await?;
    Ok(Json(charges))
}

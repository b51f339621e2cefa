//! Billing handlers

use axum::response::{IntoResponse, Response};
use axum::{extract::State, Json};
use chute_service::{
    BatchBillingSummary, BatchIssueRequest, BillingService, IssueChargeRequest, IssueOutcome,
    OperationMessage,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Conflict};
use crate::state::AppState;

/// Issue one monthly charge
///
/// POST /lancarMensalidade
///
/// A duplicate (student, month) pair answers 409 with an informational
/// message; the existing charge is left untouched.
pub async fn issue_charge(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<IssueChargeRequest>,
) -> ApiResult<Response> {
    let service = BillingService::new(state.service_context());
    match service.issue_charge(request).await? {
        IssueOutcome::Created(charge) => Ok(Json(charge).into_response()),
        IssueOutcome::Duplicate { message } => {
            Ok(Conflict(Json(OperationMessage::new(message))).into_response())
        }
    }
}

/// Issue the month's charges for all guardians' active students
///
/// POST /lancarMensalidadesEmLote
pub async fn issue_monthly_charges(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<BatchIssueRequest>,
) -> ApiResult<Json<BatchBillingSummary>> {
    let service = BillingService::new(state.service_context());
    let summary = service
        .issue_monthly_charges(&request.reference_month)
        .await?;
    Ok(Json(summary))
}

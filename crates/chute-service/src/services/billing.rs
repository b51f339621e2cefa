//! Billing
//!
//! Single-charge issuance and the monthly batch orchestrator. The invariant
//! both enforce: at most one charge per (student, reference month). Duplicate
//! suppression is a conditional write against that key, never a
//! check-then-insert, so concurrent issuers cannot double-bill.

use chute_core::{Charge, DomainError, Role};
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{BatchBillingSummary, ChargeResponse, IssueChargeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of issuing a single charge.
///
/// A duplicate is an expected, user-visible result (HTTP conflict), not a
/// system failure, so it is modelled as a success variant.
#[derive(Debug, Clone)]
pub enum IssueOutcome {
    Created(ChargeResponse),
    Duplicate { message: String },
}

/// Billing service
pub struct BillingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BillingService<'a> {
    /// Create a new BillingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue one pending charge for a student and reference month
    #[instrument(skip(self, request), fields(student_id = %request.student_id, month = %request.reference_month))]
    pub async fn issue_charge(&self, request: IssueChargeRequest) -> ServiceResult<IssueOutcome> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        if !(request.amount > 0.0) {
            return Err(DomainError::InvalidAmount(request.amount).into());
        }
        let month = parse_month(&request.reference_month)?;

        let student = self
            .ctx
            .student_repo()
            .find_by_id(request.student_id)
            .await?
            .ok_or(DomainError::StudentNotFound(request.student_id))?;
        let guardian = self
            .ctx
            .guardian_repo()
            .find_by_id(request.guardian_id)
            .await?
            .ok_or(DomainError::GuardianNotFound(request.guardian_id))?;

        // Display snapshots: prefer what the caller sent, fall back to the
        // live records.
        let student_name = request
            .student_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| student.name.clone());
        let guardian_email = request
            .guardian_email
            .filter(|email| !email.trim().is_empty())
            .unwrap_or_else(|| guardian.email.clone());

        let charge = Charge::pending(
            Uuid::new_v4(),
            student.id,
            guardian.id,
            month,
            request.amount,
            student_name,
            guardian_email,
        );

        if self.ctx.charge_repo().create_if_absent(&charge).await? {
            info!(charge_id = %charge.id, "charge issued");
            Ok(IssueOutcome::Created(ChargeResponse::from(&charge)))
        } else {
            debug!("duplicate charge suppressed");
            Ok(IssueOutcome::Duplicate {
                message: format!(
                    "Mensalidade de {} já lançada para {}.",
                    month, student.name
                ),
            })
        }
    }

    /// Issue the month's charges for every active student of every guardian.
    ///
    /// All staged charges commit as one group; pre-existing (student, month)
    /// charges are counted as skipped. Guardians with no active students are
    /// a no-op.
    #[instrument(skip(self))]
    pub async fn issue_monthly_charges(
        &self,
        reference_month: &str,
    ) -> ServiceResult<BatchBillingSummary> {
        if reference_month.trim().is_empty() {
            return Err(DomainError::MissingField("mesReferencia").into());
        }
        let month = parse_month(reference_month)?;
        let amount = self.ctx.billing().monthly_amount;

        let guardians = self.ctx.guardian_repo().list_by_role(Role::Guardian).await?;

        let mut staged = Vec::new();
        for guardian in &guardians {
            let students = self
                .ctx
                .student_repo()
                .list_active_by_guardian(guardian.id)
                .await?;
            if students.is_empty() {
                debug!(guardian_id = %guardian.id, "guardian has no active students, skipping");
                continue;
            }
            for student in students {
                staged.push(Charge::pending(
                    Uuid::new_v4(),
                    student.id,
                    guardian.id,
                    month,
                    amount,
                    student.name.clone(),
                    guardian.email.clone(),
                ));
            }
        }

        if staged.is_empty() {
            return Ok(BatchBillingSummary {
                created: 0,
                skipped: 0,
                message: format!("Nenhum aluno ativo para lançar mensalidades de {month}."),
            });
        }

        let outcome = self.ctx.charge_repo().create_many_if_absent(&staged).await?;

        info!(
            month = %month,
            created = outcome.created,
            skipped = outcome.skipped,
            "batch billing finished"
        );

        let message = if outcome.created == 0 {
            format!(
                "Nenhuma nova mensalidade para {month}: {} já lançadas.",
                outcome.skipped
            )
        } else {
            format!(
                "Mensalidades de {month} lançadas: {} criadas, {} já existentes.",
                outcome.created, outcome.skipped
            )
        };

        Ok(BatchBillingSummary {
            created: outcome.created,
            skipped: outcome.skipped,
            message,
        })
    }

    /// All charges of one guardian, newest month first
    #[instrument(skip(self))]
    pub async fn charges_for_guardian(&self, guardian_id: Uuid) -> ServiceResult<Vec<ChargeResponse>> {
        let charges = self.ctx.charge_repo().list_by_guardian(guardian_id).await?;
        Ok(charges.iter().map(ChargeResponse::from).collect())
    }
}

fn parse_month(raw: &str) -> ServiceResult<chute_core::ReferenceMonth> {
    chute_core::ReferenceMonth::parse(raw)
        .map_err(|_| DomainError::InvalidReferenceMonth(raw.to_string()).into())
}

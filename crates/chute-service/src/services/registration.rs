//! Student registration
//!
//! The full registration flow behind POST /criarResponsavelAluno:
//! validate input, resolve the guardian identity, create the student, link
//! both sides. The operation is atomic from the caller's perspective: if the
//! linkage step fails after the student row committed, the student is rolled
//! back; if even the rollback fails, a partial-failure error surfaces with
//! both IDs for manual reconciliation. Silent success after a partial write
//! is impossible.

use chrono::NaiveDate;
use chute_core::{Category, DomainError, Student};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{RegisterStudentGuardianRequest, RegistrationResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::identity::IdentityService;
use super::linkage::LinkageService;

/// Student registration service
pub struct RegistrationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RegistrationService<'a> {
    /// Create a new RegistrationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a student together with their guardian.
    ///
    /// Nothing is persisted unless every input field validates: the student
    /// payload is checked before the identity is resolved.
    #[instrument(skip(self, request), fields(student = %request.student.name, email = %request.guardian.email))]
    pub async fn register(
        &self,
        request: RegisterStudentGuardianRequest,
    ) -> ServiceResult<RegistrationResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let date_of_birth = parse_birth_date(&request.student.date_of_birth)?;
        let category = Category::parse(&request.student.category)
            .map_err(|_| DomainError::InvalidCategory(request.student.category.clone()))?;

        // Identity resolution only after the student payload is known-good,
        // so a rejected registration creates neither record.
        let resolved = IdentityService::new(self.ctx)
            .resolve_guardian(&request.guardian)
            .await?;

        let student = Student::new(
            Uuid::new_v4(),
            request.student.name.trim().to_string(),
            date_of_birth,
            category,
            request.student.jersey_number.unwrap_or_default(),
            request.student.active.unwrap_or(true),
            resolved.id,
        );

        self.ctx.student_repo().create(&student).await?;

        if let Err(link_err) = LinkageService::new(self.ctx)
            .add_link(resolved.id, student.id)
            .await
        {
            warn!(
                student_id = %student.id,
                guardian_id = %resolved.id,
                error = %link_err,
                "linkage failed after student insert, rolling back"
            );
            return match self.ctx.student_repo().delete(student.id).await {
                Ok(()) => Err(link_err),
                Err(rollback_err) => Err(DomainError::PartialFailure {
                    student_id: student.id,
                    guardian_id: resolved.id,
                    detail: format!("{link_err}; rollback failed: {rollback_err}"),
                }
                .into()),
            };
        }

        info!(
            student_id = %student.id,
            guardian_id = %resolved.id,
            new_account = resolved.temp_credential_issued,
            "student registered"
        );

        let mut message = "Aluno e responsável cadastrados com sucesso!".to_string();
        if resolved.temp_credential_issued {
            message.push_str(
                " Uma senha temporária foi definida para o responsável, \
                 que deverá redefini-la no primeiro acesso.",
            );
        }

        Ok(RegistrationResponse {
            message,
            student_id: student.id,
            guardian_id: resolved.id,
            temp_credential_issued: resolved.temp_credential_issued,
        })
    }
}

fn parse_birth_date(raw: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(raw.to_string()).into())
}

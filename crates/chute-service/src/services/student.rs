//! Student administration
//!
//! Listing, detail, in-place editing, and deletion. Editing recomputes the
//! age from the date of birth and may refresh the guardian's contact fields;
//! the guardian/student linkage itself never changes on an edit. Deletion
//! removes the student and unlinks it from its guardian.

use chrono::{NaiveDate, Utc};
use chute_core::{Category, DomainError, Student};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{
    GuardianResponse, OperationMessage, StudentDetailResponse, StudentResponse,
    UpdateStudentRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::linkage::LinkageService;

/// Student administration service
pub struct StudentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StudentService<'a> {
    /// Create a new StudentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List students, optionally restricted to one category
    #[instrument(skip(self))]
    pub async fn list(&self, category: Option<&str>) -> ServiceResult<Vec<StudentResponse>> {
        let students = match category {
            Some(raw) => {
                let category = Category::parse(raw)
                    .map_err(|_| DomainError::InvalidCategory(raw.to_string()))?;
                self.ctx.student_repo().list_by_category(category).await?
            }
            None => self.ctx.student_repo().list_all().await?,
        };

        Ok(students.iter().map(StudentResponse::from).collect())
    }

    /// Student detail: record, guardian contact, attendance history
    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> ServiceResult<StudentDetailResponse> {
        let student = self
            .ctx
            .student_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::StudentNotFound(id))?;

        let guardian = self
            .ctx
            .guardian_repo()
            .find_by_id(student.guardian_id)
            .await?;
        if guardian.is_none() {
            warn!(student_id = %id, guardian_id = %student.guardian_id, "student has no guardian record");
        }

        let attendance = self.ctx.student_repo().attendance_for(id).await?;

        Ok(StudentDetailResponse {
            student: StudentResponse::from(&student),
            guardian: guardian.as_ref().map(GuardianResponse::from),
            attendance,
        })
    }

    /// Edit a student in place; optionally refresh the guardian's contact.
    ///
    /// The age is always recomputed from the submitted date of birth.
    #[instrument(skip(self, request), fields(student_id = %id))]
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateStudentRequest,
    ) -> ServiceResult<StudentResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut student = self
            .ctx
            .student_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::StudentNotFound(id))?;

        let date_of_birth =
            NaiveDate::parse_from_str(&request.student.date_of_birth, "%Y-%m-%d")
                .map_err(|_| DomainError::InvalidDate(request.student.date_of_birth.clone()))?;
        let category = Category::parse(&request.student.category)
            .map_err(|_| DomainError::InvalidCategory(request.student.category.clone()))?;

        student.name = request.student.name.trim().to_string();
        student.date_of_birth = date_of_birth;
        student.age = Student::age_on(date_of_birth, Utc::now().date_naive());
        student.category = category;
        if let Some(jersey_number) = request.student.jersey_number {
            student.jersey_number = jersey_number;
        }
        if let Some(active) = request.student.active {
            student.active = active;
        }

        self.ctx.student_repo().update(&student).await?;

        if let Some(guardian) = request.guardian {
            // identity-field edit only, the linkage is untouched
            let updated = self
                .ctx
                .guardian_repo()
                .update_contact(
                    student.guardian_id,
                    &guardian.name,
                    &guardian.email,
                    &guardian.phone,
                )
                .await;
            match updated {
                Ok(()) => {}
                Err(DomainError::GuardianNotFound(_)) => {
                    warn!(
                        guardian_id = %student.guardian_id,
                        "guardian record missing, contact not updated"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        info!(student_id = %id, "student updated");

        Ok(StudentResponse::from(&student))
    }

    /// Delete a student and remove it from the guardian's linked set
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<OperationMessage> {
        let student = self
            .ctx
            .student_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::StudentNotFound(id))?;

        self.ctx.student_repo().delete(id).await?;

        LinkageService::new(self.ctx)
            .remove_link(student.guardian_id, id)
            .await?;

        info!(student_id = %id, "student deleted");

        Ok(OperationMessage::new("Aluno excluído com sucesso!"))
    }
}

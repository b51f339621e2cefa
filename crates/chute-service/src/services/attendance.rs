//! Attendance recording
//!
//! Per-day attendance is an upsert: at most one entry per (student, date),
//! and re-submitting a date overwrites the flag. Marking a whole roster is a
//! loop of independent per-student upserts; no cross-student transaction.

use chrono::NaiveDate;
use chute_core::{Category, DomainError};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{AttendanceHistoryResponse, OperationMessage, RosterAttendanceRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attendance recording service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record one attendance flag for one student and date (upsert)
    #[instrument(skip(self))]
    pub async fn set_attendance(
        &self,
        student_id: Uuid,
        date: NaiveDate,
        present: bool,
    ) -> ServiceResult<OperationMessage> {
        self.ctx
            .student_repo()
            .set_attendance(student_id, date, present)
            .await?;

        Ok(OperationMessage::new("Presença registrada."))
    }

    /// Mark attendance for a category roster on one date.
    ///
    /// Each student is an independent write; a failure aborts the remaining
    /// marks and surfaces the error (already-written marks stand, and
    /// re-submitting the batch is safe because every write is an upsert).
    #[instrument(skip(self, request), fields(category = %request.category, date = %request.date, marks = request.marks.len()))]
    pub async fn mark_roster(
        &self,
        request: RosterAttendanceRequest,
    ) -> ServiceResult<OperationMessage> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        Category::parse(&request.category)
            .map_err(|_| DomainError::InvalidCategory(request.category.clone()))?;

        for mark in &request.marks {
            self.ctx
                .student_repo()
                .set_attendance(mark.student_id, request.date, mark.present)
                .await?;
        }

        info!(count = request.marks.len(), "roster attendance saved");

        Ok(OperationMessage::new(format!(
            "Presenças salvas com sucesso para {} alunos!",
            request.marks.len()
        )))
    }

    /// Attendance history for a student, newest date first
    #[instrument(skip(self))]
    pub async fn history(&self, student_id: Uuid) -> ServiceResult<AttendanceHistoryResponse> {
        self.ctx
            .student_repo()
            .find_by_id(student_id)
            .await?
            .ok_or(DomainError::StudentNotFound(student_id))?;

        let entries = self.ctx.student_repo().attendance_for(student_id).await?;

        Ok(AttendanceHistoryResponse {
            student_id,
            entries,
        })
    }
}

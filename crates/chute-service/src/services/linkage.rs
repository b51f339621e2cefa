//! Linkage maintenance
//!
//! Keeps the bidirectional association between a guardian and their students
//! consistent: guardian.student_ids must contain exactly the students whose
//! guardian_id points back. Both directions are written with atomic set
//! primitives, so retries are idempotent.

use tracing::{debug, instrument, warn};
use uuid::Uuid;

use chute_core::DomainError;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Linkage maintenance service
pub struct LinkageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LinkageService<'a> {
    /// Create a new LinkageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a student to a guardian's linked set (idempotent).
    ///
    /// A missing guardian is an error here: the caller just resolved or
    /// created the guardian, so its absence means the registration cannot be
    /// completed consistently.
    #[instrument(skip(self))]
    pub async fn add_link(&self, guardian_id: Uuid, student_id: Uuid) -> ServiceResult<()> {
        let found = self
            .ctx
            .guardian_repo()
            .add_student_link(guardian_id, student_id)
            .await?;

        if !found {
            return Err(DomainError::GuardianNotFound(guardian_id).into());
        }

        debug!(guardian_id = %guardian_id, student_id = %student_id, "student linked");
        Ok(())
    }

    /// Remove a student from a guardian's linked set (idempotent).
    ///
    /// A missing guardian is tolerated but observable: the student side of
    /// the link is already gone, so there is nothing left to repair.
    #[instrument(skip(self))]
    pub async fn remove_link(&self, guardian_id: Uuid, student_id: Uuid) -> ServiceResult<()> {
        let found = self
            .ctx
            .guardian_repo()
            .remove_student_link(guardian_id, student_id)
            .await?;

        if found {
            debug!(guardian_id = %guardian_id, student_id = %student_id, "student unlinked");
        } else {
            warn!(
                guardian_id = %guardian_id,
                student_id = %student_id,
                "guardian record missing while unlinking, orphaned reference tolerated"
            );
        }

        Ok(())
    }
}

//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::ReferenceMonth;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Guardian not found: {0}")]
    GuardianNotFound(Uuid),

    #[error("Student not found: {0}")]
    StudentNotFound(Uuid),

    #[error("Charge not found: {0}")]
    ChargeNotFound(Uuid),

    #[error("Training slot not found: {0}")]
    TrainingSlotNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid reference month: {0}")]
    InvalidReferenceMonth(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Charge amount must be positive, got {0}")]
    InvalidAmount(f64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Charge already exists for student {student_id} in {month}")]
    DuplicateCharge {
        student_id: Uuid,
        month: ReferenceMonth,
    },

    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // External Collaborator Errors
    // =========================================================================
    #[error("Identity provider error: {0}")]
    IdentityProvider(String),

    // =========================================================================
    // Partial Failure
    // =========================================================================
    /// A later step failed after an earlier write committed. Carries both IDs
    /// so the inconsistency can be reconciled manually.
    #[error("Partial failure: student {student_id} created but not linked to guardian {guardian_id}: {detail}")]
    PartialFailure {
        student_id: Uuid,
        guardian_id: Uuid,
        detail: String,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GuardianNotFound(_) => "UNKNOWN_GUARDIAN",
            Self::StudentNotFound(_) => "UNKNOWN_STUDENT",
            Self::ChargeNotFound(_) => "UNKNOWN_CHARGE",
            Self::TrainingSlotNotFound(_) => "UNKNOWN_TRAINING_SLOT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::InvalidReferenceMonth(_) => "INVALID_REFERENCE_MONTH",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",

            // Conflict
            Self::DuplicateCharge { .. } => "DUPLICATE_CHARGE",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // External / partial / infrastructure
            Self::IdentityProvider(_) => "IDENTITY_PROVIDER_ERROR",
            Self::PartialFailure { .. } => "PARTIAL_FAILURE",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GuardianNotFound(_)
                | Self::StudentNotFound(_)
                | Self::ChargeNotFound(_)
                | Self::TrainingSlotNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingField(_)
                | Self::InvalidCategory(_)
                | Self::InvalidReferenceMonth(_)
                | Self::InvalidDate(_)
                | Self::InvalidAmount(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateCharge { .. } | Self::EmailAlreadyExists)
    }

    /// Check if this is a partial-failure error requiring reconciliation
    pub fn is_partial_failure(&self) -> bool {
        matches!(self, Self::PartialFailure { .. })
    }
}

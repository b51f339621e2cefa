//! Error handling utilities for repositories

use chute_core::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Check for unique violation and return the given error instead
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Database(e.to_string())
}

/// Check for foreign-key violation and return the given error instead
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::Database(e.to_string())
}

/// Create a "guardian not found" error
pub fn guardian_not_found(id: Uuid) -> DomainError {
    DomainError::GuardianNotFound(id)
}

/// Create a "student not found" error
pub fn student_not_found(id: Uuid) -> DomainError {
    DomainError::StudentNotFound(id)
}

/// Create a "training slot not found" error
pub fn training_slot_not_found(id: Uuid) -> DomainError {
    DomainError::TrainingSlotNotFound(id)
}

//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{AttendanceEntry, Charge, Guardian, Role, Student, TrainingSlot};
use crate::error::DomainError;
use crate::value_objects::{Category, ReferenceMonth};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Guardian Repository
// ============================================================================

#[async_trait]
pub trait GuardianRepository: Send + Sync {
    /// Find guardian by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Guardian>>;

    /// Find guardian by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Guardian>>;

    /// List all guardians with the given role
    async fn list_by_role(&self, role: Role) -> RepoResult<Vec<Guardian>>;

    /// Create a new guardian identity
    async fn create(&self, guardian: &Guardian) -> RepoResult<()>;

    /// Refresh name/phone (and email) of an existing identity in place.
    /// The linked-student set is untouched.
    async fn update_contact(
        &self,
        id: Uuid,
        name: &str,
        email: &str,
        phone: &str,
    ) -> RepoResult<()>;

    /// Atomically add a student ID to the linked-student set (idempotent).
    /// Returns false when the guardian row does not exist.
    async fn add_student_link(&self, guardian_id: Uuid, student_id: Uuid) -> RepoResult<bool>;

    /// Atomically remove a student ID from the linked-student set (idempotent).
    /// Returns false when the guardian row does not exist.
    async fn remove_student_link(&self, guardian_id: Uuid, student_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Student Repository
// ============================================================================

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find student by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Student>>;

    /// List all students
    async fn list_all(&self) -> RepoResult<Vec<Student>>;

    /// List students in a category
    async fn list_by_category(&self, category: Category) -> RepoResult<Vec<Student>>;

    /// List a guardian's active students
    async fn list_active_by_guardian(&self, guardian_id: Uuid) -> RepoResult<Vec<Student>>;

    /// Create a new student
    async fn create(&self, student: &Student) -> RepoResult<()>;

    /// Update an existing student
    async fn update(&self, student: &Student) -> RepoResult<()>;

    /// Delete a student
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Upsert the attendance flag for one date (at most one entry per date)
    async fn set_attendance(
        &self,
        student_id: Uuid,
        date: NaiveDate,
        present: bool,
    ) -> RepoResult<()>;

    /// Attendance history, newest date first
    async fn attendance_for(&self, student_id: Uuid) -> RepoResult<Vec<AttendanceEntry>>;
}

// ============================================================================
// Charge Repository
// ============================================================================

/// Outcome of a grouped conditional write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Rows actually inserted
    pub created: usize,
    /// Rows skipped because the natural key already existed
    pub skipped: usize,
}

#[async_trait]
pub trait ChargeRepository: Send + Sync {
    /// Insert the charge unless one already exists for the same
    /// (student, reference month). Returns true when a row was created.
    async fn create_if_absent(&self, charge: &Charge) -> RepoResult<bool>;

    /// Insert many charges in a single transaction; each row is conditional
    /// on its (student, reference month) key. Either the whole group commits
    /// or nothing does.
    async fn create_many_if_absent(&self, charges: &[Charge]) -> RepoResult<BatchOutcome>;

    /// All charges referencing a guardian, newest month first
    async fn list_by_guardian(&self, guardian_id: Uuid) -> RepoResult<Vec<Charge>>;

    /// Whether a charge exists for the (student, reference month) pair
    async fn exists(&self, student_id: Uuid, month: ReferenceMonth) -> RepoResult<bool>;
}

// ============================================================================
// Schedule Repository
// ============================================================================

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// List all training slots
    async fn list_all(&self) -> RepoResult<Vec<TrainingSlot>>;

    /// Create a new training slot
    async fn create(&self, slot: &TrainingSlot) -> RepoResult<()>;

    /// Delete a training slot
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Identity Provider
// ============================================================================

/// Port for the authentication backend holding login credentials.
///
/// Stands in for the managed identity service: account lookup by email,
/// credential provisioning, and password updates. "Not found" is signalled
/// with `Ok(None)`; any other failure is `DomainError::IdentityProvider`.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Look up the account ID registered for an email
    async fn find_account_by_email(&self, email: &str) -> RepoResult<Option<Uuid>>;

    /// Provision a new account with a hashed credential.
    /// `must_reset` marks the credential as temporary.
    async fn create_account(
        &self,
        account_id: Uuid,
        email: &str,
        password_hash: &str,
        must_reset: bool,
    ) -> RepoResult<()>;

    /// Stored password hash for an account
    async fn password_hash(&self, account_id: Uuid) -> RepoResult<Option<String>>;

    /// Replace the credential; clears or sets the reset-required flag
    async fn set_password(
        &self,
        account_id: Uuid,
        password_hash: &str,
        must_reset: bool,
    ) -> RepoResult<()>;

    /// Flag the account as requiring a password reset
    async fn mark_reset_required(&self, account_id: Uuid) -> RepoResult<()>;
}

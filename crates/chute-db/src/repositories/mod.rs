//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chute-core.
//! Each repository handles database operations for a specific domain entity.

mod charge;
mod error;
mod guardian;
mod identity;
mod schedule;
mod student;

pub use charge::PgChargeRepository;
pub use guardian::PgGuardianRepository;
pub use identity::PgIdentityProvider;
pub use schedule::PgScheduleRepository;
pub use student::PgStudentRepository;

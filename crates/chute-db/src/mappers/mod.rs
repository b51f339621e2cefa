//! Model to entity mappers
//!
//! Rows store enums (role, category, status, reference month) as text under
//! CHECK constraints; mapping back into typed domain values is fallible and a
//! mismatch is reported as a database error rather than a panic.

mod charge;
mod guardian;
mod schedule;
mod student;

pub use charge::charge_from_row;
pub use guardian::guardian_from_row;
pub use schedule::schedule_from_row;
pub use student::{attendance_from_row, student_from_row};

//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attendance;
mod charge;
mod guardian;
mod schedule;
mod student;

pub use attendance::AttendanceModel;
pub use charge::ChargeModel;
pub use guardian::GuardianModel;
pub use schedule::ScheduleModel;
pub use student::StudentModel;

//! Domain entities

mod attendance;
mod charge;
mod guardian;
mod schedule;
mod student;

pub use attendance::AttendanceEntry;
pub use charge::{Charge, ChargeStatus};
pub use guardian::{Guardian, Role};
pub use schedule::TrainingSlot;
pub use student::Student;

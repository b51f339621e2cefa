//! Attendance database model

use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for one attendance row.
///
/// The table's primary key is (student_id, date); queries are always scoped
/// to one student, so the row only carries the date and flag.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct AttendanceModel {
    pub date: NaiveDate,
    pub present: bool,
}

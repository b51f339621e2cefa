//! Attendance entry - one record per (student, calendar date)

use chrono::NaiveDate;

/// A single attendance mark.
///
/// At most one entry exists per student per date; re-submitting the same date
/// overwrites the `present` flag rather than appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttendanceEntry {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "presente")]
    pub present: bool,
}

impl AttendanceEntry {
    pub fn new(date: NaiveDate, present: bool) -> Self {
        Self { date, present }
    }
}

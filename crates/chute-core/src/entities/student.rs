//! Student entity - a registered participant in a category

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use uuid::Uuid;

use crate::value_objects::Category;

/// Student record
///
/// `age` is always derived from `date_of_birth` on the server; values supplied
/// by clients are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub category: Category,
    pub jersey_number: String,
    pub active: bool,
    pub guardian_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student, deriving `age` from the date of birth
    pub fn new(
        id: Uuid,
        name: String,
        date_of_birth: NaiveDate,
        category: Category,
        jersey_number: String,
        active: bool,
        guardian_id: Uuid,
    ) -> Self {
        let today = Utc::now().date_naive();
        Self {
            id,
            name,
            date_of_birth,
            age: Self::age_on(date_of_birth, today),
            category,
            jersey_number,
            active,
            guardian_id,
            created_at: Utc::now(),
        }
    }

    /// Age in whole years as of `today`.
    ///
    /// Calendar-year subtraction adjusted by month/day comparison: the year
    /// difference is decremented while this year's birthday has not passed.
    pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
        let mut age = today.year() - date_of_birth.year();
        if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
            age -= 1;
        }
        age
    }

    /// Recompute `age` from the stored date of birth
    pub fn refresh_age(&mut self) {
        self.age = Self::age_on(self.date_of_birth, Utc::now().date_naive());
    }
}

//! Training slot entity - a recurring weekly training for one category

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::Category;

/// Recurring weekly training slot.
///
/// Reference data consumed read-only by dashboards; plain CRUD, no uniqueness
/// invariant beyond the row identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSlot {
    pub id: Uuid,
    pub category: Category,
    pub weekday: String,
    pub time_range: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl TrainingSlot {
    pub fn new(
        id: Uuid,
        category: Category,
        weekday: String,
        time_range: String,
        location: String,
    ) -> Self {
        Self {
            id,
            category,
            weekday,
            time_range,
            location,
            created_at: Utc::now(),
        }
    }
}

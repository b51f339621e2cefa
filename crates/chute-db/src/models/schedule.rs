//! Training slot database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the schedules table
#[derive(Debug, Clone, FromRow)]
pub struct ScheduleModel {
    pub id: Uuid,
    pub category: String,
    pub weekday: String,
    pub time_range: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

//! Student database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the students table
#[derive(Debug, Clone, FromRow)]
pub struct StudentModel {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
    pub category: String,
    pub jersey_number: String,
    pub active: bool,
    pub guardian_id: Uuid,
    pub created_at: DateTime<Utc>,
}

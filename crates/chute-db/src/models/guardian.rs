//! Guardian database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the guardians table
#[derive(Debug, Clone, FromRow)]
pub struct GuardianModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub student_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

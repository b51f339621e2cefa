//! Charge database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the charges table
#[derive(Debug, Clone, FromRow)]
pub struct ChargeModel {
    pub id: Uuid,
    pub student_id: Uuid,
    pub guardian_id: Uuid,
    pub reference_month: String,
    pub amount: f64,
    pub status: String,
    pub student_name: String,
    pub guardian_email: String,
    pub created_at: DateTime<Utc>,
}

//! Charge entity - one monthly fee for one student

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::value_objects::ReferenceMonth;

/// Charge lifecycle status.
///
/// Charges are created `Pending`; the transition to `Paid` happens outside
/// this system (checkout reconciliation is manual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChargeStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "pago")]
    Paid,
}

impl ChargeStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pendente",
            Self::Paid => "pago",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pendente" => Some(Self::Pending),
            "pago" => Some(Self::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing record for one student and one reference month.
///
/// Invariant: at most one charge exists per (student, reference month) pair.
/// Student name and guardian email are denormalized snapshots for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub id: Uuid,
    pub student_id: Uuid,
    pub guardian_id: Uuid,
    pub reference_month: ReferenceMonth,
    pub amount: f64,
    pub status: ChargeStatus,
    pub student_name: String,
    pub guardian_email: String,
    pub created_at: DateTime<Utc>,
}

impl Charge {
    /// Create a new pending charge
    #[allow(clippy::too_many_arguments)]
    pub fn pending(
        id: Uuid,
        student_id: Uuid,
        guardian_id: Uuid,
        reference_month: ReferenceMonth,
        amount: f64,
        student_name: String,
        guardian_email: String,
    ) -> Self {
        Self {
            id,
            student_id,
            guardian_id,
            reference_month,
            amount,
            status: ChargeStatus::Pending,
            student_name,
            guardian_email,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ChargeStatus::Pending
    }
}

//! Guardian entity - a person account responsible for one or more students

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Account role tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    /// Club administrator: full access to rosters, attendance, and billing
    #[serde(rename = "admin")]
    Admin,
    /// Guardian ("responsavel"): read access to their own linked students
    #[serde(rename = "responsavel")]
    Guardian,
}

impl Role {
    /// Wire representation of the role
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guardian => "responsavel",
        }
    }

    /// Parse a role from its wire representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "responsavel" => Some(Self::Guardian),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guardian identity record
///
/// Invariant: `student_ids` contains only IDs of students whose `guardian_id`
/// points back to this record. The set is maintained with atomic union/remove
/// operations, never read-modify-write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guardian {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub student_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Guardian {
    /// Create a new guardian identity with an empty linked-student set
    pub fn new(id: Uuid, name: String, email: String, phone: String, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            phone,
            role,
            student_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check whether a student is linked to this guardian
    pub fn has_student(&self, student_id: Uuid) -> bool {
        self.student_ids.contains(&student_id)
    }
}

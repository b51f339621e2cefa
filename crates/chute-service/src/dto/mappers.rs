//! Entity -> response DTO mappers

use chute_core::{Charge, Guardian, Student, TrainingSlot};

use super::responses::{ChargeResponse, GuardianResponse, ScheduleResponse, StudentResponse};

impl From<&Guardian> for GuardianResponse {
    fn from(guardian: &Guardian) -> Self {
        Self {
            id: guardian.id,
            name: guardian.name.clone(),
            email: guardian.email.clone(),
            phone: guardian.phone.clone(),
            role: guardian.role,
            student_ids: guardian.student_ids.clone(),
            created_at: guardian.created_at,
        }
    }
}

impl From<&Student> for StudentResponse {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            date_of_birth: student.date_of_birth,
            age: student.age,
            category: student.category.as_str().to_string(),
            jersey_number: student.jersey_number.clone(),
            active: student.active,
            guardian_id: student.guardian_id,
            created_at: student.created_at,
        }
    }
}

impl From<&Charge> for ChargeResponse {
    fn from(charge: &Charge) -> Self {
        Self {
            id: charge.id,
            student_id: charge.student_id,
            guardian_id: charge.guardian_id,
            reference_month: charge.reference_month.to_string(),
            amount: charge.amount,
            status: charge.status,
            student_name: charge.student_name.clone(),
            guardian_email: charge.guardian_email.clone(),
            created_at: charge.created_at,
        }
    }
}

impl From<&TrainingSlot> for ScheduleResponse {
    fn from(slot: &TrainingSlot) -> Self {
        Self {
            id: slot.id,
            category: slot.category.as_str().to_string(),
            weekday: slot.weekday.clone(),
            time_range: slot.time_range.clone(),
            location: slot.location.clone(),
        }
    }
}

//! Student and attendance model -> entity mappers

use chute_core::{AttendanceEntry, Category, DomainError, RepoResult, Student};

use crate::models::{AttendanceModel, StudentModel};

/// Convert a students row into the Student entity
pub fn student_from_row(model: StudentModel) -> RepoResult<Student> {
    let category = Category::parse(&model.category).map_err(|_| {
        DomainError::Database(format!("invalid category in row: {}", model.category))
    })?;

    Ok(Student {
        id: model.id,
        name: model.name,
        date_of_birth: model.date_of_birth,
        age: model.age,
        category,
        jersey_number: model.jersey_number,
        active: model.active,
        guardian_id: model.guardian_id,
        created_at: model.created_at,
    })
}

/// Convert an attendance row into the AttendanceEntry entity
pub fn attendance_from_row(model: AttendanceModel) -> AttendanceEntry {
    AttendanceEntry::new(model.date, model.present)
}

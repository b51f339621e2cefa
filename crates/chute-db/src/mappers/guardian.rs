//! Guardian model -> entity mapper

use chute_core::{DomainError, Guardian, RepoResult, Role};

use crate::models::GuardianModel;

/// Convert a guardians row into the Guardian entity
pub fn guardian_from_row(model: GuardianModel) -> RepoResult<Guardian> {
    let role = Role::parse(&model.role)
        .ok_or_else(|| DomainError::Database(format!("invalid role in row: {}", model.role)))?;

    Ok(Guardian {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        role,
        student_ids: model.student_ids,
        created_at: model.created_at,
    })
}

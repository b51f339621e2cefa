//! Charge model -> entity mapper

use chute_core::{Charge, ChargeStatus, DomainError, ReferenceMonth, RepoResult};

use crate::models::ChargeModel;

/// Convert a charges row into the Charge entity
pub fn charge_from_row(model: ChargeModel) -> RepoResult<Charge> {
    let reference_month = ReferenceMonth::parse(&model.reference_month).map_err(|_| {
        DomainError::Database(format!(
            "invalid reference month in row: {}",
            model.reference_month
        ))
    })?;
    let status = ChargeStatus::parse(&model.status)
        .ok_or_else(|| DomainError::Database(format!("invalid status in row: {}", model.status)))?;

    Ok(Charge {
        id: model.id,
        student_id: model.student_id,
        guardian_id: model.guardian_id,
        reference_month,
        amount: model.amount,
        status,
        student_name: model.student_name,
        guardian_email: model.guardian_email,
        created_at: model.created_at,
    })
}

//! Training slot model -> entity mapper

use chute_core::{Category, DomainError, RepoResult, TrainingSlot};

use crate::models::ScheduleModel;

/// Convert a schedules row into the TrainingSlot entity
pub fn schedule_from_row(model: ScheduleModel) -> RepoResult<TrainingSlot> {
    let category = Category::parse(&model.category).map_err(|_| {
        DomainError::Database(format!("invalid category in row: {}", model.category))
    })?;

    Ok(TrainingSlot {
        id: model.id,
        category,
        weekday: model.weekday,
        time_range: model.time_range,
        location: model.location,
        created_at: model.created_at,
    })
}

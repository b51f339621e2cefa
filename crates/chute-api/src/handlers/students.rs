//! Student administration handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use chute_service::{
    OperationMessage, StudentDetailResponse, StudentResponse, StudentService, UpdateStudentRequest,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for listing students
#[derive(Debug, Deserialize)]
pub struct ListStudentsQuery {
    #[serde(rename = "categoria")]
    pub category: Option<String>,
}

/// List students, optionally filtered by category
///
/// GET /alunos?categoria=Sub-9
pub async fn list_students(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListStudentsQuery>,
) -> ApiResult<Json<Vec<StudentResponse>>> {
    let service = StudentService::new(state.service_context());
    let students = service.list(query.category.as_deref()).await?;
    Ok(Json(students))
}

/// Student detail with guardian contact and attendance history
///
/// GET /alunos/:id
pub async fn get_student(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<StudentDetailResponse>> {
    let service = StudentService::new(state.service_context());
    let detail = service.get(id).await?;
    Ok(Json(detail))
}

/// Edit a student (and optionally the guardian contact) in place
///
/// PUT /alunos/:id
pub async fn update_student(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateStudentRequest>,
) -> ApiResult<Json<StudentResponse>> {
    let service = StudentService::new(state.service_context());
    let student = service.update(id, request).await?;
    Ok(Json(student))
}

/// Delete a student and unlink it from its guardian
///
/// DELETE /alunos/:id
pub async fn delete_student(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<OperationMessage>> {
    let service = StudentService::new(state.service_context());
    let message = service.delete(id).await?;
    Ok(Json(message))
}

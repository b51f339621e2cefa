//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Dates and categories that need field-level error messages are
//! carried as strings and parsed by the services.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Registration Requests
// ============================================================================

/// Student payload of the registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StudentInput {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "nome do aluno é obrigatório"))]
    pub name: String,

    /// Date of birth as ISO `YYYY-MM-DD`; parsed server-side
    #[serde(rename = "dataNascimento")]
    #[validate(length(min = 1, message = "dataNascimento é obrigatória"))]
    pub date_of_birth: String,

    #[serde(rename = "categoria")]
    #[validate(length(min = 1, message = "categoria é obrigatória"))]
    pub category: String,

    #[serde(rename = "numeroCamisa", default)]
    pub jersey_number: Option<String>,

    #[serde(rename = "ativo", default)]
    pub active: Option<bool>,
}

/// Guardian payload of the registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GuardianInput {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "nome do responsável é obrigatório"))]
    pub name: String,

    #[validate(email(message = "email inválido"))]
    pub email: String,

    #[serde(rename = "telefone")]
    #[validate(length(min = 1, message = "telefone é obrigatório"))]
    pub phone: String,
}

/// POST /criarResponsavelAluno
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterStudentGuardianRequest {
    #[serde(rename = "aluno")]
    #[validate(nested)]
    pub student: StudentInput,

    #[serde(rename = "responsavel")]
    #[validate(nested)]
    pub guardian: GuardianInput,
}

// ============================================================================
// Billing Requests
// ============================================================================

/// POST /lancarMensalidade
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IssueChargeRequest {
    #[serde(rename = "responsavelId")]
    pub guardian_id: Uuid,

    #[serde(rename = "alunoId")]
    pub student_id: Uuid,

    /// Reference month as `YYYY-MM`; parsed server-side
    #[serde(rename = "mesReferencia")]
    #[validate(length(min = 1, message = "mesReferencia é obrigatório"))]
    pub reference_month: String,

    #[serde(rename = "valor")]
    pub amount: f64,

    /// Display snapshot stored on the charge for reporting
    #[serde(rename = "responsavelEmail", default)]
    pub guardian_email: Option<String>,

    /// Display snapshot stored on the charge for reporting
    #[serde(rename = "alunoNome", default)]
    pub student_name: Option<String>,
}

/// POST /lancarMensalidadesEmLote
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BatchIssueRequest {
    #[serde(rename = "mesReferencia")]
    #[validate(length(min = 1, message = "mesReferencia é obrigatório"))]
    pub reference_month: String,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// POST /alunos/:id/presenca
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SetAttendanceRequest {
    #[serde(rename = "data")]
    pub date: NaiveDate,

    #[serde(rename = "presente")]
    pub present: bool,
}

/// One roster entry of a batch attendance call
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RosterMark {
    #[serde(rename = "alunoId")]
    pub student_id: Uuid,

    #[serde(rename = "presente")]
    pub present: bool,
}

/// POST /chamada - mark a whole category roster for one date
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RosterAttendanceRequest {
    #[serde(rename = "categoria")]
    #[validate(length(min = 1, message = "categoria é obrigatória"))]
    pub category: String,

    #[serde(rename = "data")]
    pub date: NaiveDate,

    #[serde(rename = "presencas")]
    pub marks: Vec<RosterMark>,
}

// ============================================================================
// Student Update Request
// ============================================================================

/// PUT /alunos/:id - edit a student and, optionally, the guardian contact
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[serde(rename = "aluno")]
    #[validate(nested)]
    pub student: StudentInput,

    /// Guardian contact refresh; identity fields only, the linkage is untouched
    #[serde(rename = "responsavel", default)]
    #[validate(nested)]
    pub guardian: Option<GuardianInput>,
}

// ============================================================================
// Schedule Requests
// ============================================================================

/// POST /horarios
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    #[serde(rename = "categoria")]
    #[validate(length(min = 1, message = "categoria é obrigatória"))]
    pub category: String,

    #[serde(rename = "diaSemana")]
    #[validate(length(min = 1, message = "diaSemana é obrigatório"))]
    pub weekday: String,

    #[serde(rename = "horario")]
    #[validate(length(min = 1, message = "horario é obrigatório"))]
    pub time_range: String,

    #[serde(rename = "local")]
    #[validate(length(min = 1, message = "local é obrigatório"))]
    pub location: String,
}

// ============================================================================
// Auth Requests
// ============================================================================

/// POST /auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email inválido"))]
    pub email: String,

    #[serde(rename = "senha")]
    pub password: String,
}

/// POST /auth/redefinirSenha
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "email inválido"))]
    pub email: String,
}

/// POST /admin/criarAdmin
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "nome é obrigatório"))]
    pub name: String,

    #[validate(email(message = "email inválido"))]
    pub email: String,

    #[serde(rename = "telefone")]
    #[validate(length(min = 1, message = "telefone é obrigatório"))]
    pub phone: String,

    #[serde(rename = "senha")]
    #[validate(length(min = 8, message = "senha deve ter no mínimo 8 caracteres"))]
    pub password: String,
}

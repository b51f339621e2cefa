//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output using the
//! Portuguese wire names the frontend expects. IDs serialize as UUID strings.

use chrono::{DateTime, Utc};
use chute_core::{AttendanceEntry, ChargeStatus, Role};
use serde::Serialize;
use uuid::Uuid;

/// Human-readable outcome of an operation
#[derive(Debug, Clone, Serialize)]
pub struct OperationMessage {
    pub message: String,
}

impl OperationMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Registration Responses
// ============================================================================

/// Outcome of POST /criarResponsavelAluno
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationResponse {
    pub message: String,

    #[serde(rename = "alunoId")]
    pub student_id: Uuid,

    #[serde(rename = "responsavelId")]
    pub guardian_id: Uuid,

    /// Whether a temporary credential was provisioned for a new guardian
    #[serde(rename = "senhaTemporariaGerada")]
    pub temp_credential_issued: bool,
}

// ============================================================================
// Guardian / Student Responses
// ============================================================================

/// Guardian identity as exposed to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct GuardianResponse {
    pub id: Uuid,

    #[serde(rename = "nome")]
    pub name: String,

    pub email: String,

    #[serde(rename = "telefone")]
    pub phone: String,

    pub role: Role,

    #[serde(rename = "alunoIds")]
    pub student_ids: Vec<Uuid>,

    #[serde(rename = "dataCadastro")]
    pub created_at: DateTime<Utc>,
}

/// Student as exposed to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct StudentResponse {
    pub id: Uuid,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "dataNascimento")]
    pub date_of_birth: chrono::NaiveDate,

    #[serde(rename = "idade")]
    pub age: i32,

    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "numeroCamisa")]
    pub jersey_number: String,

    #[serde(rename = "ativo")]
    pub active: bool,

    #[serde(rename = "responsavelId")]
    pub guardian_id: Uuid,

    #[serde(rename = "dataCadastro")]
    pub created_at: DateTime<Utc>,
}

/// Student with guardian contact and attendance history
#[derive(Debug, Clone, Serialize)]
pub struct StudentDetailResponse {
    #[serde(rename = "aluno")]
    pub student: StudentResponse,

    /// Missing when the guardian record was removed out-of-band
    #[serde(rename = "responsavel", skip_serializing_if = "Option::is_none")]
    pub guardian: Option<GuardianResponse>,

    #[serde(rename = "presencas")]
    pub attendance: Vec<AttendanceEntry>,
}

/// Guardian profile with linked students (GET /me)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    #[serde(rename = "responsavel")]
    pub guardian: GuardianResponse,

    #[serde(rename = "alunos")]
    pub students: Vec<StudentResponse>,
}

// ============================================================================
// Attendance Responses
// ============================================================================

/// Attendance history for one student, newest date first
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceHistoryResponse {
    #[serde(rename = "alunoId")]
    pub student_id: Uuid,

    #[serde(rename = "presencas")]
    pub entries: Vec<AttendanceEntry>,
}

// ============================================================================
// Billing Responses
// ============================================================================

/// A charge as exposed to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct ChargeResponse {
    pub id: Uuid,

    #[serde(rename = "alunoId")]
    pub student_id: Uuid,

    #[serde(rename = "responsavelId")]
    pub guardian_id: Uuid,

    #[serde(rename = "mesReferencia")]
    pub reference_month: String,

    #[serde(rename = "valor")]
    pub amount: f64,

    pub status: ChargeStatus,

    #[serde(rename = "alunoNome")]
    pub student_name: String,

    #[serde(rename = "responsavelEmail")]
    pub guardian_email: String,

    #[serde(rename = "dataLancamento")]
    pub created_at: DateTime<Utc>,
}

/// Outcome of a batch billing run
#[derive(Debug, Clone, Serialize)]
pub struct BatchBillingSummary {
    #[serde(rename = "criadas")]
    pub created: usize,

    #[serde(rename = "ignoradas")]
    pub skipped: usize,

    pub message: String,
}

// ============================================================================
// Schedule Responses
// ============================================================================

/// A training slot as exposed to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub id: Uuid,

    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "diaSemana")]
    pub weekday: String,

    #[serde(rename = "horario")]
    pub time_range: String,

    #[serde(rename = "local")]
    pub location: String,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,

    #[serde(rename = "usuario")]
    pub user: GuardianResponse,
}

impl LoginResponse {
    pub fn new(access_token: String, expires_in: i64, user: GuardianResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

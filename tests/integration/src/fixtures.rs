//! Test fixtures and data generators
//!
//! Reusable wire-format payloads and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Student payload of a registration request
#[derive(Debug, Clone, Serialize)]
pub struct StudentPayload {
    pub nome: String,
    #[serde(rename = "dataNascimento")]
    pub data_nascimento: String,
    pub categoria: String,
    #[serde(rename = "numeroCamisa", skip_serializing_if = "Option::is_none")]
    pub numero_camisa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ativo: Option<bool>,
}

/// Guardian payload of a registration request
#[derive(Debug, Clone, Serialize)]
pub struct GuardianPayload {
    pub nome: String,
    pub email: String,
    pub telefone: String,
}

/// POST /criarResponsavelAluno body
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationPayload {
    pub aluno: StudentPayload,
    pub responsavel: GuardianPayload,
}

impl RegistrationPayload {
    /// A valid registration with a unique guardian email
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            aluno: StudentPayload {
                nome: format!("Aluno {suffix}"),
                data_nascimento: "2016-05-01".to_string(),
                categoria: "Sub-9".to_string(),
                numero_camisa: Some("10".to_string()),
                ativo: None,
            },
            responsavel: GuardianPayload {
                nome: format!("Responsavel {suffix}"),
                email: format!("responsavel{suffix}@example.com"),
                telefone: "11 99999-0000".to_string(),
            },
        }
    }
}

/// POST /criarResponsavelAluno response
#[derive(Debug, Deserialize)]
pub struct RegistrationResult {
    pub message: String,
    #[serde(rename = "alunoId")]
    pub aluno_id: String,
    #[serde(rename = "responsavelId")]
    pub responsavel_id: String,
    #[serde(rename = "senhaTemporariaGerada")]
    pub senha_temporaria_gerada: bool,
}

/// POST /lancarMensalidade body
#[derive(Debug, Clone, Serialize)]
pub struct ChargePayload {
    #[serde(rename = "responsavelId")]
    pub responsavel_id: String,
    #[serde(rename = "alunoId")]
    pub aluno_id: String,
    #[serde(rename = "mesReferencia")]
    pub mes_referencia: String,
    pub valor: f64,
    #[serde(rename = "responsavelEmail", skip_serializing_if = "Option::is_none")]
    pub responsavel_email: Option<String>,
    #[serde(rename = "alunoNome", skip_serializing_if = "Option::is_none")]
    pub aluno_nome: Option<String>,
}

impl ChargePayload {
    pub fn new(registration: &RegistrationResult, mes: &str) -> Self {
        Self {
            responsavel_id: registration.responsavel_id.clone(),
            aluno_id: registration.aluno_id.clone(),
            mes_referencia: mes.to_string(),
            valor: 80.0,
            responsavel_email: None,
            aluno_nome: None,
        }
    }
}

/// Charge as returned by the API
#[derive(Debug, Deserialize)]
pub struct ChargeResult {
    pub id: String,
    #[serde(rename = "alunoId")]
    pub aluno_id: String,
    #[serde(rename = "mesReferencia")]
    pub mes_referencia: String,
    pub valor: f64,
    pub status: String,
}

/// POST /lancarMensalidadesEmLote response
#[derive(Debug, Deserialize)]
pub struct BatchResult {
    pub criadas: usize,
    pub ignoradas: usize,
    pub message: String,
}

/// Student as returned by the API
#[derive(Debug, Deserialize)]
pub struct StudentResult {
    pub id: String,
    pub nome: String,
    pub idade: i32,
    pub categoria: String,
    pub ativo: bool,
    #[serde(rename = "responsavelId")]
    pub responsavel_id: String,
}

/// Attendance entry as returned by the API
#[derive(Debug, Deserialize)]
pub struct AttendanceEntryResult {
    pub data: String,
    pub presente: bool,
}

/// GET /alunos/:id/presencas response
#[derive(Debug, Deserialize)]
pub struct AttendanceHistoryResult {
    #[serde(rename = "alunoId")]
    pub aluno_id: String,
    pub presencas: Vec<AttendanceEntryResult>,
}

/// Training slot as returned by the API
#[derive(Debug, Deserialize)]
pub struct ScheduleResult {
    pub id: String,
    pub categoria: String,
    #[serde(rename = "diaSemana")]
    pub dia_semana: String,
    pub horario: String,
    pub local: String,
}

/// GET /me response
#[derive(Debug, Deserialize)]
pub struct ProfileResult {
    pub responsavel: GuardianResult,
    pub alunos: Vec<StudentResult>,
}

/// Guardian as returned by the API
#[derive(Debug, Deserialize)]
pub struct GuardianResult {
    pub id: String,
    pub nome: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "alunoIds")]
    pub aluno_ids: Vec<String>,
}

//! Route definitions
//!
//! The three legacy endpoints keep the exact names the frontend calls
//! (`/criarResponsavelAluno`, `/lancarMensalidade`,
//! `/lancarMensalidadesEmLote`); everything else is resource-style.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{
    attendance, auth, billing, health, profile, registration, schedules, students,
};
use crate::state::AppState;

/// Create the main API router with all routes
/// (health is exported separately to bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(legacy_routes())
        .merge(auth_routes())
        .merge(student_routes())
        .merge(schedule_routes())
        .merge(profile_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// The endpoints the original frontend calls by name
fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/criarResponsavelAluno",
            post(registration::register_student_guardian),
        )
        .route("/lancarMensalidade", post(billing::issue_charge))
        .route(
            "/lancarMensalidadesEmLote",
            post(billing::issue_monthly_charges),
        )
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/redefinirSenha", post(auth::request_password_reset))
        .route("/admin/criarAdmin", post(auth::create_admin))
}

/// Student administration routes
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/alunos", get(students::list_students))
        .route("/alunos/:id", get(students::get_student))
        .route("/alunos/:id", put(students::update_student))
        .route("/alunos/:id", delete(students::delete_student))
        .route("/alunos/:id/presenca", post(attendance::set_attendance))
        .route("/alunos/:id/presencas", get(attendance::attendance_history))
        .route("/chamada", post(attendance::mark_roster))
}

/// Training schedule routes
fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/horarios", get(schedules::list_schedules))
        .route("/horarios", post(schedules::create_schedule))
        .route("/horarios/:id", delete(schedules::delete_schedule))
}

/// Authenticated-account routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(profile::get_profile))
        .route("/me/pagamentos", get(profile::get_own_charges))
}

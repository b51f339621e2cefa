//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_student_and_guardian() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let payload = RegistrationPayload::unique();
    let response = server
        .post_auth("/criarResponsavelAluno", &token, &payload)
        .await
        .unwrap();
    let result: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(result.senha_temporaria_gerada);
    assert!(result.message.contains("senha temporária"));
}

#[tokio::test]
async fn test_register_same_guardian_twice_reuses_identity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let payload = RegistrationPayload::unique();
    let response = server
        .post_auth("/criarResponsavelAluno", &token, &payload)
        .await
        .unwrap();
    let first: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    let mut second_payload = payload.clone();
    second_payload.aluno.nome = "Outro Aluno".to_string();
    let response = server
        .post_auth("/criarResponsavelAluno", &token, &second_payload)
        .await
        .unwrap();
    let second: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(first.responsavel_id, second.responsavel_id);
    assert!(!second.senha_temporaria_gerada);
    assert_ne!(first.aluno_id, second.aluno_id);
}

#[tokio::test]
async fn test_register_missing_category_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let mut payload = RegistrationPayload::unique();
    payload.aluno.categoria = String::new();
    let response = server
        .post_auth("/criarResponsavelAluno", &token, &payload)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let payload = RegistrationPayload::unique();

    let response = server
        .post("/criarResponsavelAluno", &payload)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Billing Tests
// ============================================================================

#[tokio::test]
async fn test_issue_charge_and_duplicate_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server
        .post_auth(
            "/criarResponsavelAluno",
            &token,
            &RegistrationPayload::unique(),
        )
        .await
        .unwrap();
    let registration: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    let charge = ChargePayload::new(&registration, "2024-03");
    let response = server
        .post_auth("/lancarMensalidade", &token, &charge)
        .await
        .unwrap();
    let created: ChargeResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.status, "pendente");
    assert_eq!(created.mes_referencia, "2024-03");

    // identical second call: conflict, not failure
    let response = server
        .post_auth("/lancarMensalidade", &token, &charge)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_issue_charge_rejects_invalid_amount() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server
        .post_auth(
            "/criarResponsavelAluno",
            &token,
            &RegistrationPayload::unique(),
        )
        .await
        .unwrap();
    let registration: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    let mut charge = ChargePayload::new(&registration, "2024-03");
    charge.valor = 0.0;
    let response = server
        .post_auth("/lancarMensalidade", &token, &charge)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_batch_billing_summary() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server
        .post_auth(
            "/criarResponsavelAluno",
            &token,
            &RegistrationPayload::unique(),
        )
        .await
        .unwrap();
    let registration: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    // a month far from other tests' data keeps the counts deterministic
    let mes = format!("21{:02}-07", unique_suffix() % 100);

    // pre-bill this student, then run the batch for the same month
    let charge = ChargePayload::new(&registration, &mes);
    let response = server
        .post_auth("/lancarMensalidade", &token, &charge)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post_auth(
            "/lancarMensalidadesEmLote",
            &token,
            &serde_json::json!({"mesReferencia": mes}),
        )
        .await
        .unwrap();
    let summary: BatchResult = assert_json(response, StatusCode::OK).await.unwrap();

    // at least the pre-billed student was skipped, and the batch reports
    // counts either way
    assert!(summary.ignoradas >= 1);
    assert!(!summary.message.is_empty());
}

#[tokio::test]
async fn test_batch_billing_requires_month() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server
        .post_auth(
            "/lancarMensalidadesEmLote",
            &token,
            &serde_json::json!({"mesReferencia": ""}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Attendance Tests
// ============================================================================

#[tokio::test]
async fn test_attendance_upsert() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server
        .post_auth(
            "/criarResponsavelAluno",
            &token,
            &RegistrationPayload::unique(),
        )
        .await
        .unwrap();
    let registration: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();
    let aluno_id = registration.aluno_id;

    for presente in [true, false] {
        let response = server
            .post_auth(
                &format!("/alunos/{aluno_id}/presenca"),
                &token,
                &serde_json::json!({"data": "2024-03-01", "presente": presente}),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/alunos/{aluno_id}/presencas"), &token)
        .await
        .unwrap();
    let history: AttendanceHistoryResult = assert_json(response, StatusCode::OK).await.unwrap();

    // one entry for the date, holding the last submitted flag
    assert_eq!(history.presencas.len(), 1);
    assert_eq!(history.presencas[0].data, "2024-03-01");
    assert!(!history.presencas[0].presente);
}

// ============================================================================
// Student Administration Tests
// ============================================================================

#[tokio::test]
async fn test_delete_student_unlinks_guardian() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server
        .post_auth(
            "/criarResponsavelAluno",
            &token,
            &RegistrationPayload::unique(),
        )
        .await
        .unwrap();
    let registration: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/alunos/{}", registration.aluno_id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // record gone
    let response = server
        .get_auth(&format!("/alunos/{}", registration.aluno_id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_student_detail_includes_guardian() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let payload = RegistrationPayload::unique();
    let guardian_email = payload.responsavel.email.clone();
    let response = server
        .post_auth("/criarResponsavelAluno", &token, &payload)
        .await
        .unwrap();
    let registration: RegistrationResult = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth(&format!("/alunos/{}", registration.aluno_id), &token)
        .await
        .unwrap();
    let detail: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(detail["aluno"]["categoria"], "Sub-9");
    assert_eq!(detail["responsavel"]["email"], guardian_email);
}

// ============================================================================
// Schedule Tests
// ============================================================================

#[tokio::test]
async fn test_schedule_crud() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server
        .post_auth(
            "/horarios",
            &token,
            &serde_json::json!({
                "categoria": "Sub-11",
                "diaSemana": "Quarta-feira",
                "horario": "19:00 - 20:00",
                "local": "Campo Municipal"
            }),
        )
        .await
        .unwrap();
    let created: ScheduleResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.categoria, "Sub-11");

    let response = server.get_auth("/horarios", &token).await.unwrap();
    let slots: Vec<ScheduleResult> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(slots.iter().any(|s| s.id == created.id));

    let response = server
        .delete_auth(&format!("/horarios/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/auth/login",
            &serde_json::json!({"email": "nobody@example.com", "senha": "errada"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_password_reset_is_always_acknowledged() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/auth/redefinirSenha",
            &serde_json::json!({"email": "whoever@example.com"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_admin_profile_lists_role() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.bootstrap_admin().await.unwrap();

    let response = server.get_auth("/me", &token).await.unwrap();
    let profile: ProfileResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.responsavel.role, "admin");
}

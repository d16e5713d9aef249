//! End-to-end tests against the full router.

use crate::api::models::{auth::ProviderIdResponse, patients::PatientResponse};
use crate::test_utils::create_test_server;
use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
#[test_log::test]
async fn test_signup_login_and_patient_round_trip(pool: PgPool) {
    let server = create_test_server(pool);

    let response = server
        .post("/api/signup")
        .json(&json!({ "email": "a@b.com", "password": "pw1" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "provider_id": 1 }));

    let response = server
        .post("/api/login")
        .json(&json!({ "email": "a@b.com", "password": "pw1" }))
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({ "provider_id": 1 }));

    let response = server
        .post("/api/patients")
        .json(&json!({
            "provider_id": 1,
            "first_name": "john",
            "last_name": "doe",
            "dob": "2000-01-01",
            "status": "active",
            "address": " 1 Main St ",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let expected = json!({
        "id": 1,
        "first_name": "John",
        "middle_name": "",
        "last_name": "Doe",
        "dob": "2000-01-01",
        "status": "active",
        "address": "1 Main St",
    });
    response.assert_json(&expected);

    let response = server.get("/api/patients").add_query_param("provider_id", 1).await;
    response.assert_status_ok();
    response.assert_json(&json!([expected]));

    let response = server.get("/api/patients").add_query_param("provider_id", 2).await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
#[test_log::test]
async fn test_providers_never_see_each_others_patients(pool: PgPool) {
    let server = create_test_server(pool);

    let mut provider_ids = Vec::new();
    for email in ["first@clinic.com", "second@clinic.com"] {
        let body: ProviderIdResponse = server
            .post("/api/signup")
            .json(&json!({ "email": email, "password": "pw1" }))
            .await
            .json();
        provider_ids.push(body.provider_id);
    }

    for (provider_id, name) in provider_ids.iter().zip(["alice", "bob"]) {
        server
            .post("/api/patients")
            .json(&json!({
                "provider_id": provider_id,
                "first_name": name,
                "last_name": "smith",
                "dob": "1990-05-05",
                "status": "active",
                "address": "2 High St",
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    for (provider_id, name) in provider_ids.iter().zip(["Alice", "Bob"]) {
        let patients: Vec<PatientResponse> = server.get("/api/patients").add_query_param("provider_id", provider_id).await.json();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].first_name, name);
    }
}

#[sqlx::test]
#[test_log::test]
async fn test_patient_for_unknown_provider_is_rejected(pool: PgPool) {
    let server = create_test_server(pool);

    let response = server
        .post("/api/patients")
        .json(&json!({
            "provider_id": 999,
            "first_name": "john",
            "last_name": "doe",
            "dob": "2000-01-01",
            "status": "active",
            "address": "1 Main St",
        }))
        .await;

    // The foreign key violation is reported through the generic constraint message, never raw
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "Name field is too long. Please shorten and try again." }));
}

#[sqlx::test]
#[test_log::test]
async fn test_login_timing_hash_is_built_at_startup(pool: PgPool) {
    let server = create_test_server(pool);
    assert!(crate::auth::password::dummy_hash_initialized());

    let response = server
        .post("/api/login")
        .json(&json!({ "email": "nobody@clinic.com", "password": "pw1" }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&json!({ "error": "Invalid email or password" }));
}

#[sqlx::test]
#[test_log::test]
async fn test_healthz(pool: PgPool) {
    let server = create_test_server(pool);

    let response = server.get("/healthz").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

#[sqlx::test]
#[test_log::test]
async fn test_openapi_and_docs_are_served(pool: PgPool) {
    let server = create_test_server(pool);

    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let doc: serde_json::Value = response.json();
    assert!(doc["openapi"].is_string());
    assert!(doc["paths"]["/signup"]["post"].is_object());
    assert!(doc["paths"]["/patients"]["get"].is_object());

    let response = server.get("/docs").await;
    response.assert_status_ok();
    assert!(response.text().to_lowercase().contains("html"));
}

#[sqlx::test]
#[test_log::test]
async fn test_migrations_are_idempotent(pool: PgPool) {
    // #[sqlx::test] has already applied them once
    crate::migrator().run(&pool).await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT table_name::text FROM information_schema.tables WHERE table_schema = 'public' AND table_name IN ('providers', 'patients') ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(tables, vec!["patients", "providers"]);
}

// ============================================================================
// REST API Auth Tests
// ============================================================================
//
// Tests for the credential endpoint and the access gate:
// - POST /auth/login - Issue the static catalog credential
// - Gate enforcement on every catalog route
//
// ============================================================================

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

use test_utils::{body_json, request, spawn_app};

#[tokio::test]
async fn login_issues_a_usable_token() {
    let app = spawn_app();

    let response = app
        .router
        .clone()
        .oneshot(request("POST", "/auth/login", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());

    // The freshly issued token passes the gate
    let response = app
        .router
        .clone()
        .oneshot(request("GET", "/productos", Some(token), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_token_is_rejected_with_400() {
    let app = spawn_app();

    let response = app
        .router
        .clone()
        .oneshot(request("GET", "/productos", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Falta token");
}

#[tokio::test]
async fn invalid_token_is_rejected_with_400() {
    let app = spawn_app();

    let response = app
        .router
        .clone()
        .oneshot(request("GET", "/productos", Some("not-a-jwt"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Token inválido o expirado");
}

#[tokio::test]
async fn gate_runs_before_the_operation() {
    let app = spawn_app();

    // The id does not exist, but the gate must reject first: 400, not 404
    let uri = format!("/productos/{}", Uuid::new_v4());
    let response = app
        .router
        .clone()
        .oneshot(request("DELETE", &uri, None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Same for a create with a perfectly valid body
    let body = json!({
        "nombre": "Widget",
        "sku": "SKU-1",
        "precio": 100,
        "stock": 5,
        "activo": true
    });
    let response = app
        .router
        .clone()
        .oneshot(request("POST", "/productos", None, Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_is_not_gated() {
    let app = spawn_app();

    let response = app
        .router
        .clone()
        .oneshot(request("GET", "/health", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

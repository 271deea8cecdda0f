//! Integration tests for POST /api/v1/auth/login and the public routes

mod common;

use actix_web::test;
use chrono::Duration;
use serde_json::{json, Value};

use tg_api::create_app;
use tg_core::InMemorySessionStore;

use common::{bearer, state, token_service_at, UnavailableStore, TEST_PASSWORD};

#[actix_web::test]
async fn test_login_issues_working_token() {
    let store = InMemorySessionStore::new();
    let service = token_service_at(store.clone(), Duration::zero());
    let app = test::init_service(create_app(state(service))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "user_name": "test_user", "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 1800);
    assert_eq!(store.len().await, 1);

    let token = body["access_token"].as_str().unwrap();
    let req = test::TestRequest::get()
        .uri("/api/v1/me")
        .insert_header(bearer(token))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(me["user_id"], 20);
    assert_eq!(me["role"], "test");
    assert_eq!(me["user_name"], "test_user");
    assert!(me.get("session_id").is_none());
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let store = InMemorySessionStore::new();
    let service = token_service_at(store.clone(), Duration::zero());
    let app = test::init_service(create_app(state(service))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "user_name": "test_user", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
    assert!(body.get("access_token").is_none());
    assert!(store.is_empty().await);
}

#[actix_web::test]
async fn test_login_unknown_user_looks_like_wrong_password() {
    let service = token_service_at(InMemorySessionStore::new(), Duration::zero());
    let app = test::init_service(create_app(state(service))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "user_name": "nobody", "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[actix_web::test]
async fn test_login_rejects_bad_bodies() {
    let service = token_service_at(InMemorySessionStore::new(), Duration::zero());
    let app = test::init_service(create_app(state(service))).await;

    for body in [
        json!({ "user_name": "test_user" }),
        json!({ "user_name": "", "password": TEST_PASSWORD }),
        json!({ "user_name": "test_user", "password": "" }),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}

#[actix_web::test]
async fn test_login_store_outage_returns_no_token() {
    let service = token_service_at(UnavailableStore::failing_saves(), Duration::zero());
    let app = test::init_service(create_app(state(service))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "user_name": "root", "password": TEST_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INTERNAL_ERROR");
    assert!(body.get("access_token").is_none());
}

#[actix_web::test]
async fn test_health_and_unknown_route() {
    let service = token_service_at(InMemorySessionStore::new(), Duration::zero());
    let app = test::init_service(create_app(state(service))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");

    let req = test::TestRequest::get().uri("/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

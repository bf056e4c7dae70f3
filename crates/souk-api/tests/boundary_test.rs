// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fault translation tests, including the axum boundary integration.

use std::sync::Mutex;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use souk_api::{
    ApiFault, Envelope, FaultTranslator, GENERIC_FAULT_MESSAGE, NoContent, Profile,
};
use tower::ServiceExt;

#[test]
fn test_validation_fault_writes_field_errors_verbatim() {
    let translator = FaultTranslator::new(Profile::Production);
    let fault = ApiFault::Validation(vec![
        "email must not be empty".to_string(),
        "rate must be between 0 and 100".to_string(),
    ]);

    let (status, Json(envelope)) = translator.translate(&fault);

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!envelope.is_successful);
    assert_eq!(
        envelope.errors,
        Some(vec![
            "email must not be empty".to_string(),
            "rate must be between 0 and 100".to_string(),
        ])
    );
}

#[test]
fn test_missing_reference_maps_to_404() {
    let translator = FaultTranslator::new(Profile::Production);
    let fault = ApiFault::MissingReference("account 42".to_string());

    let (status, Json(envelope)) = translator.translate(&fault);

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        envelope.errors,
        Some(vec![GENERIC_FAULT_MESSAGE.to_string()])
    );
}

#[test]
fn test_invalid_operation_maps_to_400() {
    let translator = FaultTranslator::new(Profile::Production);
    let fault = ApiFault::InvalidOperation("basket already checked out".to_string());

    let (status, _) = translator.translate(&fault);
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn test_unclassified_fault_maps_to_500() {
    let translator = FaultTranslator::new(Profile::Production);
    let fault = ApiFault::from(anyhow::anyhow!("db pool exhausted"));

    let (status, Json(envelope)) = translator.translate(&fault);

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        envelope.errors,
        Some(vec![GENERIC_FAULT_MESSAGE.to_string()])
    );
}

#[test]
fn test_development_profile_surfaces_fault_message() {
    let translator = FaultTranslator::new(Profile::Development);
    let fault = ApiFault::InvalidOperation("basket already checked out".to_string());

    let (_, Json(envelope)) = translator.translate(&fault);

    assert_eq!(
        envelope.errors,
        Some(vec![
            "invalid operation: basket already checked out".to_string()
        ])
    );
}

#[test]
fn test_production_profile_hides_fault_message() {
    let translator = FaultTranslator::new(Profile::Production);
    let fault = ApiFault::InvalidOperation("basket already checked out".to_string());

    let (_, Json(envelope)) = translator.translate(&fault);

    assert_eq!(
        envelope.errors,
        Some(vec![GENERIC_FAULT_MESSAGE.to_string()])
    );
}

// Process environment is shared across test threads; every test touching it
// takes this lock and restores a clean slate before reading.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_profile_from_env_defaults_to_production() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe { std::env::remove_var("SOUK_PROFILE") };

    assert_eq!(Profile::from_env(), Profile::Production);
    assert_eq!(FaultTranslator::from_env().profile(), Profile::Production);
}

#[test]
fn test_profile_from_env_development_opt_in() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    for value in ["development", "dev", "Development", "DEV"] {
        unsafe { std::env::set_var("SOUK_PROFILE", value) };
        assert_eq!(Profile::from_env(), Profile::Development, "value: {value}");
    }
    unsafe { std::env::remove_var("SOUK_PROFILE") };
}

#[test]
fn test_profile_from_env_unrecognized_value_is_production() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe { std::env::set_var("SOUK_PROFILE", "staging") };

    let profile = Profile::from_env();
    unsafe { std::env::remove_var("SOUK_PROFILE") };

    assert_eq!(profile, Profile::Production);
}

async fn failing_handler() -> (StatusCode, Json<Envelope<NoContent>>) {
    let translator = FaultTranslator::new(Profile::Production);
    translator.translate(&ApiFault::MissingReference("order 7".to_string()))
}

#[tokio::test]
async fn test_translated_fault_is_a_valid_axum_response() {
    let app = Router::new().route("/api/v1/orders/{id}", get(failing_handler));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/orders/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let object = body.as_object().unwrap();

    assert_eq!(body["errors"], serde_json::json!([GENERIC_FAULT_MESSAGE]));
    assert!(!object.contains_key("statusCode"));
    assert!(!object.contains_key("isSuccessful"));
}

// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use account_ledger_server::{router, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Helper to create a router and keep a handle on its state
pub fn test_app() -> (Router, AppState) {
    let state = AppState::with_cpf_header();
    (router(state.clone()), state)
}

/// Send one request through the router and decode the JSON body.
///
/// An empty body decodes to `Value::Null`.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cpf: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cpf) = cpf {
        builder = builder.header("cpf", cpf);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Open an account and assert it was created
pub async fn open_account(app: &Router, cpf: &str, name: &str) {
    let (status, _) = send(
        app,
        Method::POST,
        "/account",
        None,
        Some(serde_json::json!({ "cpf": cpf, "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

pub async fn balance(app: &Router, cpf: &str) -> Value {
    let (status, body) = send(app, Method::GET, "/balance", Some(cpf), None).await;
    assert_eq!(status, StatusCode::OK);
    body
}

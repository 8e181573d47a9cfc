mod common;

use account_ledger_server::{
    config::Config, middleware::identify::HeaderIdentity, router, services::ledger_service,
    state::AppState,
};
use axum::http::{Method, StatusCode};
use chrono::{Duration, Local, Utc};
use serde_json::json;

use common::{balance, open_account, send, test_app};

#[tokio::test]
async fn test_withdrawal_is_bounded_by_balance() {
    let (app, _state) = test_app();
    open_account(&app, "222", "Carl").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/deposit",
        Some("222"),
        Some(json!({ "description": "Salary", "amount": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_null());
    assert_eq!(balance(&app, "222").await, json!(100.0));

    let (status, body) = send(
        &app,
        Method::POST,
        "/withdraw",
        Some("222"),
        Some(json!({ "amount": 150 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Insufficient funds!" }));
    assert_eq!(balance(&app, "222").await, json!(100.0));

    let (_, statement) = send(&app, Method::GET, "/statement", Some("222"), None).await;
    assert_eq!(statement.as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        Method::POST,
        "/withdraw",
        Some("222"),
        Some(json!({ "amount": 40 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(balance(&app, "222").await, json!(60.0));
}

#[tokio::test]
async fn test_statement_lists_entries_in_order() {
    let (app, _state) = test_app();
    open_account(&app, "222", "Carl").await;

    send(
        &app,
        Method::POST,
        "/deposit",
        Some("222"),
        Some(json!({ "description": "Salary", "amount": 100 })),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/withdraw",
        Some("222"),
        Some(json!({ "amount": 30 })),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/statement", Some("222"), None).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["type"], "credit");
    assert_eq!(entries[0]["description"], "Salary");
    assert_eq!(entries[0]["amount"], json!(100.0));
    assert_eq!(entries[1]["type"], "debit");
    assert_eq!(entries[1]["amount"], json!(30.0));
    assert!(entries[1].get("description").is_none());
    assert!(entries[1]["created_at"].as_str().is_some());
}

#[tokio::test]
async fn test_statement_by_date_returns_same_day_entries() {
    let (app, state) = test_app();
    open_account(&app, "333", "Dana").await;

    for amount in [10, 20] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/deposit",
            Some("333"),
            Some(json!({ "amount": amount })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // Backdated entry on another day
    let earlier = Utc::now() - Duration::days(3);
    {
        let mut directory = state.directory.write().await;
        let customer = directory.find_by_tax_id_mut("333").unwrap();
        ledger_service::deposit(customer, 30.0, Some("old".into()), earlier);
    }

    let today = Local::now().date_naive();
    let uri = format!("/statement/date?date={}", today.format("%Y-%m-%d"));
    let (status, body) = send(&app, Method::GET, &uri, Some("333"), None).await;
    assert_eq!(status, StatusCode::OK);
    let amounts: Vec<f64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["amount"].as_f64().unwrap())
        .collect();
    assert_eq!(amounts, vec![10.0, 20.0]);

    let uri = format!(
        "/statement/date?date={}",
        earlier.with_timezone(&Local).date_naive().format("%Y-%m-%d")
    );
    let (_, body) = send(&app, Method::GET, &uri, Some("333"), None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["description"], "old");

    let (status, body) = send(
        &app,
        Method::GET,
        "/statement/date?date=2001-01-01",
        Some("333"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_statement_by_date_rejects_bad_date() {
    let (app, _state) = test_app();
    open_account(&app, "333", "Dana").await;

    for uri in ["/statement/date?date=yesterday", "/statement/date"] {
        let (status, body) = send(&app, Method::GET, uri, Some("333"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_non_numeric_amount_is_rejected_without_mutation() {
    let (app, _state) = test_app();
    open_account(&app, "222", "Carl").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/deposit",
        Some("222"),
        Some(json!({ "amount": "100" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some());

    let (status, _) = send(&app, Method::POST, "/withdraw", Some("222"), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, statement) = send(&app, Method::GET, "/statement", Some("222"), None).await;
    assert_eq!(statement, json!([]));
}

#[tokio::test]
async fn test_removed_customer_loses_ledger_access() {
    let (app, _state) = test_app();
    open_account(&app, "444", "Eve").await;
    send(
        &app,
        Method::POST,
        "/deposit",
        Some("444"),
        Some(json!({ "amount": 5 })),
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, "/account", Some("444"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/balance", Some("444"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Customer not found!" }));
}

#[tokio::test]
async fn test_identity_header_is_configurable() {
    let config = Config {
        identity_header: "x-tax-id".to_string(),
        ..Config::default()
    };
    let identity = HeaderIdentity::from_name(&config.identity_header).unwrap();
    let app = router(AppState::new(identity));
    open_account(&app, "555", "Fay").await;

    // The default header no longer identifies anyone
    let (status, _) = send(&app, Method::GET, "/balance", Some("555"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = axum::http::Request::builder()
        .method(Method::GET)
        .uri("/balance")
        .header("x-tax-id", "555")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(app.clone(), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_withdrawals_never_overdraw() {
    let (app, state) = test_app();
    open_account(&app, "666", "Gus").await;
    send(
        &app,
        Method::POST,
        "/deposit",
        Some("666"),
        Some(json!({ "amount": 100 })),
    )
    .await;

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    Method::POST,
                    "/withdraw",
                    Some("666"),
                    Some(json!({ "amount": 10 })),
                )
                .await
                .0
            })
        })
        .collect();

    let mut accepted = 0;
    for handle in handles {
        let status = handle.await.unwrap();
        if status == StatusCode::CREATED {
            accepted += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }

    assert_eq!(accepted, 10);
    assert_eq!(balance(&app, "666").await, json!(0.0));

    let directory = state.directory.read().await;
    assert_eq!(directory.find_by_tax_id("666").unwrap().statement.len(), 11);
}

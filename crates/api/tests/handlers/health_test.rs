use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_ok_when_store_answers() {
    let mut ctx = TestContext::new();
    ctx.contacts.expect_ping().times(1).returning(|| Ok(()));
    let server = ctx.server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_health_unavailable_when_store_fails() {
    let mut ctx = TestContext::new();
    ctx.contacts
        .expect_ping()
        .times(1)
        .returning(|| Err(eyre::eyre!("pool timed out while waiting for an open connection")));
    let server = ctx.server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.json::<Value>(), json!({ "status": "unavailable" }));
}

#[tokio::test]
async fn test_version() {
    let server = TestContext::new().server();

    let response = server.get("/version").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["version"],
        json!(env!("CARGO_PKG_VERSION"))
    );
}

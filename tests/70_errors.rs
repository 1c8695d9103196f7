mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

use common::{FailingStore, TestServer};
use voxara_nbfc_backend::database::{Collection, MemoryStore};

const LEAKED_FRAGMENT: &str = "secret-cluster";

#[tokio::test]
async fn failing_inserts_return_generic_500() -> Result<()> {
    let server = TestServer::spawn_with(FailingStore, &[]).await?;

    let posts = [
        ("/api/save-update", common::daily_update("Asha", "No", None)),
        ("/api/missed-call", json!({ "phone_number": "+911234567890" })),
        ("/api/save-summary", json!({ "summary": "Customer asked about EMI dates" })),
    ];
    for (path, payload) in posts {
        let (status, body) = server.post(path, &payload).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}: {}", path, body);
        assert_eq!(body, json!({ "detail": "Database temporarily unavailable" }));
        assert!(!body.to_string().contains(LEAKED_FRAGMENT));
    }
    Ok(())
}

#[tokio::test]
async fn failing_reads_return_generic_500() -> Result<()> {
    let server = TestServer::spawn_with(FailingStore, &[]).await?;

    for path in ["/api/updates", "/api/queries", "/api/missed-calls"] {
        let (status, body) = server.get(path).await?;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}: {}", path, body);
        assert!(body["detail"].is_string(), "body: {}", body);
        assert!(!body.to_string().contains(LEAKED_FRAGMENT));
    }
    Ok(())
}

#[tokio::test]
async fn health_degrades_without_driver_text() -> Result<()> {
    let server = TestServer::spawn_with(FailingStore, &[]).await?;

    let res = server.client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["data"]["status"], json!("degraded"));
    assert!(!body.to_string().contains(LEAKED_FRAGMENT), "body: {}", body);

    // Liveness does not depend on the store
    let res = server.client.get(server.url("/")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn auth_still_runs_before_a_failing_store() -> Result<()> {
    let server = TestServer::spawn_with(FailingStore, &[]).await?;

    let res = server
        .client
        .post(server.url("/api/missed-call"))
        .json(&json!({ "phone_number": "+911234567890" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn oversized_body_is_rejected() -> Result<()> {
    let server =
        TestServer::spawn_with(MemoryStore::new(), &[("API_MAX_REQUEST_SIZE_BYTES", "1024")])
            .await?;

    let mut payload = common::daily_update("Asha", "No", None);
    payload["visit_summary"] = json!("x".repeat(4096));

    let (status, body) = server.post("/api/save-update", &payload).await?;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE, "body: {}", body);
    assert!(body["detail"].is_string(), "body: {}", body);

    // Same limit when the body carries no content type
    let res = server
        .client
        .post(server.url("/api/save-update"))
        .header(common::API_KEY_HEADER, common::API_KEY)
        .body(payload.to_string())
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    // A normal report still fits
    let (status, _) = server
        .post("/api/save-update", &common::daily_update("Asha", "No", None))
        .await?;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(server.store.count(Collection::DailyUpdates).await, 1);
    Ok(())
}

mod support;

use axum::http::StatusCode;
use httpmock::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use support::{proxy_request, test_app};

#[tokio::test]
async fn provided_request_id_is_echoed_and_forwarded_upstream() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/products")
                .header("x-request-id", "req-123");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        })
        .await;

    let app = test_app(&upstream.base_url());
    let mut request = proxy_request("GET", "products");
    request
        .headers_mut()
        .insert("x-request-id", "req-123".parse().expect("header"));

    let response = app.oneshot(request).await.expect("proxy response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("req-123")
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn missing_request_id_is_generated() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/products").header_exists("x-request-id");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([]));
        })
        .await;

    let app = test_app(&upstream.base_url());
    let response = app
        .oneshot(proxy_request("GET", "products"))
        .await
        .expect("proxy response");

    assert_eq!(response.status(), StatusCode::OK);
    let id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("generated request id");
    assert!(!id.is_empty());
}

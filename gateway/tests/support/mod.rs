#![allow(dead_code)]
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use dawalink_gateway::{app, config::Config, state::AppState};

pub fn test_app(upstream_base: &str) -> Router {
    let config = Config {
        target_api: upstream_base.trim_end_matches('/').to_string(),
        port: 0,
        token_ttl: Duration::from_secs(86_400),
        cookie_secure: false,
    };
    app(AppState::new(config))
}

pub fn proxy_request(method: &str, endpoint: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(format!("/api/proxy/{}", endpoint))
        .body(Body::empty())
        .expect("build request")
}

pub fn proxy_request_with_json(
    method: &str,
    endpoint: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(format!("/api/proxy/{}", endpoint))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request")
}

pub async fn response_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

use axum::{
    body::Bytes,
    extract::{Extension, Path, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    config::Config,
    error::AppError,
    middleware::{RequestId, REQUEST_ID_HEADER},
    state::AppState,
    utils::cookies::{
        build_session_cookie, extract_cookie_value, CookieOptions, SameSite, SESSION_COOKIE_NAME,
    },
};

/// The one endpoint whose response is intercepted to mint a session cookie.
pub const LOGIN_ENDPOINT: &str = "login";

/// A browser request reduced to the parts the upstream call is built from.
/// The verb handlers all converge here instead of duplicating the
/// forwarding logic per method.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

impl UpstreamRequest {
    /// Builds the upstream request from raw request parts. GET bodies are
    /// ignored, a bodyless DELETE forwards with no body (not a JSON
    /// `null`), and every other mutating verb must carry valid JSON.
    pub fn from_parts(method: Method, endpoint: String, body: &[u8]) -> Result<Self, AppError> {
        let body = if method == Method::GET {
            None
        } else if body.is_empty() {
            if method == Method::DELETE {
                None
            } else {
                return Err(AppError::BadRequest("Request body is required".to_string()));
            }
        } else {
            Some(serde_json::from_slice(body).map_err(|_| {
                AppError::BadRequest("Request body is not valid JSON".to_string())
            })?)
        };

        Ok(Self {
            method,
            endpoint,
            body,
        })
    }
}

/// Catch-all handler for `/api/proxy/{*endpoint}`. The browser never talks
/// to the upstream API directly; this is the sole egress point, and the
/// only place where the session cookie is turned back into a bearer
/// credential.
pub async fn forward(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    Extension(request_id): Extension<RequestId>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = UpstreamRequest::from_parts(method, endpoint, &body)?;
    let token = session_token(&headers);

    tracing::debug!(
        method = %request.method,
        endpoint = %request.endpoint,
        has_token = token.is_some(),
        request_id = %request_id.0,
        "forwarding to upstream"
    );

    let upstream = send_upstream(&state, &request, token.as_deref(), &request_id).await?;
    relay(&state.config, &request, upstream).await
}

fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
}

async fn send_upstream(
    state: &AppState,
    request: &UpstreamRequest,
    token: Option<&str>,
    request_id: &RequestId,
) -> Result<reqwest::Response, AppError> {
    let url = format!("{}/{}", state.config.target_api, request.endpoint);

    // The incoming cookie header is consumed here and never forwarded; the
    // upstream only ever sees the bearer form.
    let mut builder = state
        .upstream
        .request(request.method.clone(), &url)
        .header(header::CONTENT_TYPE, "application/json")
        .header(REQUEST_ID_HEADER, request_id.0.as_str());

    if let Some(token) = token {
        builder = builder.bearer_auth(token);
    }
    if let Some(body) = &request.body {
        builder = builder.json(body);
    }

    Ok(builder.send().await?)
}

/// Mirrors the upstream response back to the browser: JSON is relayed as
/// JSON, anything else is wrapped as a JSON string, and the status code is
/// always the upstream's own. Error statuses are relayed verbatim, never
/// remapped.
async fn relay(
    config: &Config,
    request: &UpstreamRequest,
    upstream: reqwest::Response,
) -> Result<Response, AppError> {
    let status = upstream.status();
    if status.is_client_error() || status.is_server_error() {
        tracing::warn!(
            status = status.as_u16(),
            endpoint = %request.endpoint,
            "upstream returned an error response"
        );
    }

    if is_json(upstream.headers()) {
        let payload: Value = upstream.json().await?;
        let cookie = login_session_cookie(config, request, status, &payload);

        let mut response = (status, Json(payload)).into_response();
        if let Some(cookie) = cookie {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(_) => tracing::warn!(
                    "login token is not a valid cookie value; session cookie not set"
                ),
            }
        }
        Ok(response)
    } else {
        let text = upstream.text().await?;
        Ok((status, Json(Value::String(text))).into_response())
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

/// A successful `POST login` whose body carries a string `token` field is
/// the only response that sets the session cookie.
fn login_session_cookie(
    config: &Config,
    request: &UpstreamRequest,
    status: StatusCode,
    payload: &Value,
) -> Option<String> {
    if request.method != Method::POST
        || request.endpoint != LOGIN_ENDPOINT
        || !status.is_success()
    {
        return None;
    }
    let token = payload.as_object()?.get("token")?.as_str()?;
    Some(build_session_cookie(
        token,
        config.token_ttl,
        CookieOptions {
            secure: config.cookie_secure,
            same_site: SameSite::Lax,
        },
    ))
}

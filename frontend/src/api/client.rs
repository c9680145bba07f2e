use reqwest::{header, Client, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config;

/// Transport-level failures carry the cause; status failures carry the best
/// available upstream message (body `message`, then `error`, then the HTTP
/// status text). Action modules turn `Status` into the response envelope
/// and let everything else propagate.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Single chokepoint for every browser-to-gateway call. Relative paths are
/// joined to the runtime-configured base URL (the proxy prefix by default)
/// and the session cookie always rides along.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.resolved_base_url().await;
        format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Issues a request and returns the parsed body. A malformed body on a
    /// 2xx response degrades to `Value::Null` rather than failing the call;
    /// only a non-2xx status is an error.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.resolve_url(path).await;

        let mut builder = self.client.request(method.clone(), &url);
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        log::debug!("api request: {} {} body={:?}", method, url, body);

        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let status = response.status();
        let payload = read_payload(response).await;

        log::debug!("api response: {} {} -> {} {:?}", method, url, status, payload);

        if status.is_success() {
            Ok(payload)
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(status, &payload),
            })
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.request(Method::GET, path, None).await?;
        decode(value)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode(body)?;
        let value = self.request(Method::POST, path, Some(&body)).await?;
        decode(value)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = encode(body)?;
        let value = self.request(Method::PUT, path, Some(&body)).await?;
        decode(value)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.request(Method::DELETE, path, None).await?;
        decode(value)
    }
}

async fn read_payload(response: reqwest::Response) -> Value {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false);

    if is_json {
        match response.json::<Value>().await {
            Ok(value) => value,
            Err(err) => {
                log::warn!("malformed JSON body treated as empty: {}", err);
                Value::Null
            }
        }
    } else {
        match response.text().await {
            Ok(text) if !text.is_empty() => Value::String(text),
            _ => Value::Null,
        }
    }
}

fn error_message(status: StatusCode, payload: &Value) -> String {
    payload
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| payload.get("error").and_then(Value::as_str))
        .map(|message| message.to_string())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_message_prefers_message_then_error_then_status_text() {
        let status = StatusCode::BAD_REQUEST;
        assert_eq!(
            error_message(status, &json!({"message": "M", "error": "E"})),
            "M"
        );
        assert_eq!(error_message(status, &json!({"error": "E"})), "E");
        assert_eq!(error_message(status, &json!({})), "Bad Request");
        assert_eq!(error_message(status, &Value::Null), "Bad Request");
    }

    #[test]
    fn transport_errors_carry_the_request_failed_prefix() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Route prefix of the gateway's proxy endpoint; every relative API path is
/// resolved against this unless a deployment overrides the base URL.
pub const PROXY_PREFIX: &str = "/api/proxy";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn get_from_env_js() -> Option<String> {
    // Expect optional global object: window.__DAWALINK_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__DAWALINK_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = window_origin()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

fn origin_default() -> String {
    window_origin()
        .map(|origin| format!("{}{}", origin, PROXY_PREFIX))
        .unwrap_or_else(|| format!("http://localhost:3000{}", PROXY_PREFIX))
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(env_url) = get_from_env_js() {
        return cache_base_url(&env_url);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(&origin_default())
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

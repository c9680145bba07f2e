use serde_json::{json, Value};
use validator::Validate;

use super::{
    client::{ApiClient, ApiError},
    envelope,
    types::{ActionResponse, LoginPayload, LoginResponse, UpdateProfilePayload, UserProfile},
    validation_failure,
};

/// `POST login` rides through the gateway, which mints the session cookie
/// from the response; the returned token is only kept in memory.
pub async fn login(
    api: &ApiClient,
    payload: LoginPayload,
) -> Result<ActionResponse<LoginResponse>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(api.post("login", &payload).await)
}

pub async fn logout(api: &ApiClient) -> Result<ActionResponse<Value>, ApiError> {
    envelope(api.post("logout", &json!({})).await)
}

pub async fn current_user(api: &ApiClient) -> Result<ActionResponse<UserProfile>, ApiError> {
    envelope(api.get("auth/me").await)
}

pub async fn update_profile(
    api: &ApiClient,
    payload: UpdateProfilePayload,
) -> Result<ActionResponse<UserProfile>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(api.put("auth/profile", &payload).await)
}

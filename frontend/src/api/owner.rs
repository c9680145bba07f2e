use serde_json::{json, Value};
use validator::Validate;

use super::{
    client::{ApiClient, ApiError},
    envelope,
    types::{ActionResponse, PendingAccount, PlatformStats, RejectAccountPayload},
    validation_failure,
};

pub async fn pending_accounts(
    api: &ApiClient,
) -> Result<ActionResponse<Vec<PendingAccount>>, ApiError> {
    envelope(api.get("owner/accounts/pending").await)
}

pub async fn approve_account(api: &ApiClient, id: &str) -> Result<ActionResponse<Value>, ApiError> {
    envelope(
        api.put(&format!("owner/accounts/{}/approve", id), &json!({}))
            .await,
    )
}

pub async fn reject_account(
    api: &ApiClient,
    id: &str,
    payload: RejectAccountPayload,
) -> Result<ActionResponse<Value>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(
        api.put(&format!("owner/accounts/{}/reject", id), &payload)
            .await,
    )
}

pub async fn platform_stats(api: &ApiClient) -> Result<ActionResponse<PlatformStats>, ApiError> {
    envelope(api.get("owner/stats").await)
}

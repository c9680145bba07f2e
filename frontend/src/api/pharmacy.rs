use validator::Validate;

use super::{
    client::{ApiClient, ApiError},
    envelope,
    types::{ActionResponse, Branch, CreateBranchPayload, CreateOrderPayload, Offer, Order},
    validation_failure,
};

pub async fn list_branches(api: &ApiClient) -> Result<ActionResponse<Vec<Branch>>, ApiError> {
    envelope(api.get("pharmacy/branches").await)
}

pub async fn create_branch(
    api: &ApiClient,
    payload: CreateBranchPayload,
) -> Result<ActionResponse<Branch>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(api.post("pharmacy/branches", &payload).await)
}

pub async fn list_orders(api: &ApiClient) -> Result<ActionResponse<Vec<Order>>, ApiError> {
    envelope(api.get("pharmacy/orders").await)
}

pub async fn create_order(
    api: &ApiClient,
    payload: CreateOrderPayload,
) -> Result<ActionResponse<Order>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(api.post("pharmacy/orders", &payload).await)
}

pub async fn browse_offers(api: &ApiClient) -> Result<ActionResponse<Vec<Offer>>, ApiError> {
    envelope(api.get("pharmacy/offers").await)
}

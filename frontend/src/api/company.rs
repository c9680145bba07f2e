use serde_json::Value;
use validator::Validate;

use super::{
    client::{ApiClient, ApiError},
    envelope,
    types::{
        ActionResponse, CreateOfferPayload, CreateProductPayload, Offer, Product,
        UpdateProductPayload, Warehouse,
    },
    validation_failure,
};

pub async fn list_products(api: &ApiClient) -> Result<ActionResponse<Vec<Product>>, ApiError> {
    envelope(api.get("company/products").await)
}

pub async fn create_product(
    api: &ApiClient,
    payload: CreateProductPayload,
) -> Result<ActionResponse<Product>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(api.post("company/products", &payload).await)
}

pub async fn update_product(
    api: &ApiClient,
    id: &str,
    payload: UpdateProductPayload,
) -> Result<ActionResponse<Product>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(api.put(&format!("company/products/{}", id), &payload).await)
}

pub async fn delete_product(api: &ApiClient, id: &str) -> Result<ActionResponse<Value>, ApiError> {
    envelope(api.delete(&format!("company/products/{}", id)).await)
}

pub async fn list_warehouses(api: &ApiClient) -> Result<ActionResponse<Vec<Warehouse>>, ApiError> {
    envelope(api.get("company/warehouses").await)
}

pub async fn create_offer(
    api: &ApiClient,
    payload: CreateOfferPayload,
) -> Result<ActionResponse<Offer>, ApiError> {
    if let Err(errors) = payload.validate() {
        return Ok(validation_failure(&errors));
    }
    envelope(api.post("company/offers", &payload).await)
}

pub mod auth;
pub mod client;
pub mod company;
pub mod owner;
pub mod pharmacy;
pub mod types;

pub use client::*;
pub use types::*;

use validator::ValidationErrors;

/// Maps a wrapper result into the action envelope: upstream business errors
/// become `{success: false}`, transport and decode failures stay `Err` for
/// the calling hook to handle.
pub(crate) fn envelope<T>(result: Result<T, ApiError>) -> Result<ActionResponse<T>, ApiError> {
    match result {
        Ok(data) => Ok(ActionResponse::ok(data)),
        Err(ApiError::Status { message, .. }) => Ok(ActionResponse::failure(message)),
        Err(other) => Err(other),
    }
}

pub(crate) fn validation_failure<T>(errors: &ValidationErrors) -> ActionResponse<T> {
    let messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    if messages.is_empty() {
        ActionResponse::failure("البيانات المدخلة غير صالحة")
    } else {
        ActionResponse::failure(messages.join("، "))
    }
}

//! Shared response envelope types for API handlers.
//!
//! Every success body carries `"success": true`, an optional human-readable
//! `message`, and the endpoint's payload fields at the top level. Error bodies
//! are produced by [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{ "success": true, "message"?: ..., ...payload }` envelope.
///
/// `T` must serialize as a map (a struct with named fields); its fields are
/// flattened into the envelope.
///
/// ```ignore
/// Ok(Json(ApiResponse::new(BookingBody { booking }).with_message("Booking created")))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Body for endpoints that only confirm an action.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

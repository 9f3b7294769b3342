//! Failure taxonomy for client-library calls.
//!
//! [`ApiError::Response`] is the structured case: the call reached the API
//! and came back with a failure status, so status/headers/body are available
//! for the output envelope. Everything else never produced a usable HTTP
//! response and surfaces as an unstructured error.

use std::time::Duration;

use thiserror::Error;

use crate::api::transport::{Headers, RawResponse};
use crate::model::ApiErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a failure status code.
    #[error("{message}")]
    Response {
        status_code: u16,
        headers: Headers,
        body: String,
        message: String,
    },

    /// The call never produced an HTTP response (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A payload could not be encoded or a response body had the wrong shape.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A tracked request reached the `FAILED` state.
    #[error("request {request_id} failed: {message}")]
    RequestFailed { request_id: String, message: String },

    /// A tracked request did not reach a terminal state within the budget.
    #[error("request {request_id} not done after {waited:?}")]
    WaitTimeout { request_id: String, waited: Duration },
}

impl ApiError {
    /// Build the structured failure case from a raw failure response.
    ///
    /// The message is lifted from the body's `messages` array when it parses
    /// and carries exactly one entry; several entries collapse to a generic
    /// message since no single one can speak for the call.
    pub(crate) fn from_response(raw: RawResponse) -> Self {
        let message = match serde_json::from_str::<ApiErrorBody>(&raw.body) {
            Ok(parsed) => match parsed.messages.as_deref() {
                Some([only]) => only
                    .message
                    .clone()
                    .unwrap_or_else(|| "API Error".to_string()),
                Some(many) if many.len() > 1 => "multiple API errors".to_string(),
                _ => "API Error".to_string(),
            },
            Err(_) => "API Error".to_string(),
        };
        Self::Response {
            status_code: raw.status,
            headers: raw.headers,
            body: raw.body,
            message,
        }
    }
}

//! The terminal output shape.
//!
//! Exactly one [`Envelope`] is printed per run. All three top-level fields
//! are always serialized (as `null` when unset) so callers can rely on the
//! keys being present, and exactly one of `result`/`error` is populated for
//! any dispatched call.

use serde::Serialize;
use serde_json::Value;

use crate::api::Headers;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub http_response: Option<HttpResponsePayload>,
    pub result: Option<Value>,
    pub error: Option<ErrorPayload>,
}

impl Envelope {
    /// Pretty-print for stdout. If serialization itself fails the fallback
    /// still emits a JSON object so the output contract holds.
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|error| format!("{{\"error\": \"{error}\"}}"))
    }
}

/// Transport-level view of the call, mirrored on success and on any failure
/// that reached the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponsePayload {
    pub status_code: Option<u16>,
    pub headers: Option<Headers>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub message: String,
    pub api_response: Option<HttpResponsePayload>,
    pub stack_trace: Option<Vec<String>>,
}

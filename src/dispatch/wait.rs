//! The `waitForRequest` pseudo-operation.
//!
//! Long-running operations are tracked by a request URL. This path bypasses
//! the catalog entirely: it pulls the tracking identifier out of the URL and
//! hands it to the client library's blocking poll primitive.

use std::time::Duration;

use crate::api::ApiClient;
use crate::dispatch::coerce::shape_of;
use crate::envelope::Envelope;
use crate::error::DispatchError;
use crate::input::Param;

/// Reserved operation name routed here instead of through the catalog.
pub const WAIT_FOR_REQUEST: &str = "waitForRequest";

/// Total wait budget for one poll run.
const MAX_WAIT: Duration = Duration::from_secs(80);
/// Delay between status polls.
const POLL_INTERVAL: Duration = Duration::from_secs(4);
/// Grace period before the first poll.
const INITIAL_DELAY: Duration = Duration::from_secs(2);

/// Wait until the tracked request completes. Polling has no payload: the
/// success envelope is empty except for `error: null`.
pub async fn wait_for_request(
    client: &ApiClient,
    params: &[Param],
) -> Result<Envelope, DispatchError> {
    let request_param = params
        .iter()
        .find(|param| param.name == "request")
        .ok_or(DispatchError::MissingRequestParam)?;
    let request_url = request_param.value.as_str().ok_or_else(|| {
        DispatchError::param(
            "request",
            format!("expected string URL, got {}", shape_of(&request_param.value)),
        )
    })?;

    let request_id = request_id_from_url(request_url)?;
    tracing::debug!(%request_id, "waiting for request completion");
    client
        .wait_for_request(&request_id, MAX_WAIT, POLL_INTERVAL, INITIAL_DELAY)
        .await?;
    Ok(Envelope::default())
}

/// Extract the tracking identifier from a request URL: the second-to-last
/// `/`-delimited segment, made of hex digits and hyphens
/// (`.../1a2b-3c4d/status` -> `1a2b-3c4d`).
fn request_id_from_url(url: &str) -> Result<String, DispatchError> {
    let segments: Vec<&str> = url.split('/').collect();
    let candidate = match segments.len().checked_sub(2) {
        Some(index) => segments[index],
        None => return Err(DispatchError::InvalidRequestUrl(url.to_string())),
    };
    let is_id = !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c == '-' || c.is_ascii_hexdigit());
    if !is_id {
        return Err(DispatchError::InvalidRequestUrl(url.to_string()));
    }
    Ok(candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_second_to_last_segment() {
        let id = request_id_from_url(
            "https://api.example.com/1a2b3c4d-5e6f-7890-abcd-ef1234567890/status",
        )
        .unwrap();
        assert_eq!(id, "1a2b3c4d-5e6f-7890-abcd-ef1234567890");
    }

    #[test]
    fn accepts_nested_request_paths() {
        let id = request_id_from_url(
            "https://api.cloud.example.com/v6/requests/deadbeef-cafe/status",
        )
        .unwrap();
        assert_eq!(id, "deadbeef-cafe");
    }

    #[test]
    fn rejects_urls_without_an_identifier_segment() {
        assert!(request_id_from_url("status").is_err());
        assert!(request_id_from_url("https://api.example.com/not_hex!/status").is_err());
        assert!(request_id_from_url("https://api.example.com//status").is_err());
    }
}

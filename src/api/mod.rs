//! In-repo client library for the cloud API.
//!
//! The surface mirrors what an OpenAPI generator would produce: one struct
//! per resource group whose `*_with_http_info` methods return the full
//! [`ApiResponse`] (status, headers, typed payload) instead of just the
//! deserialized body, a shared [`ApiClient`] owning the transport, and the
//! blocking [`ApiClient::wait_for_request`] poll primitive for tracked
//! long-running operations.
//!
//! Every method parameter is an `Option`: the dispatcher binds `null` for
//! parameters the caller did not supply and the API itself is the authority
//! on which ones were actually required.

pub mod datacenters;
pub mod error;
pub mod requests;
pub mod servers;
pub mod transport;
pub mod volumes;

use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;

use crate::model::{RequestState, RequestStatus};

pub use datacenters::DataCentersApi;
pub use error::ApiError;
pub use requests::RequestsApi;
pub use servers::ServersApi;
pub use transport::{ApiRequest, Headers, HttpTransport, RawResponse, Transport};
pub use volumes::VolumesApi;

/// Typed transport response: what a `*_with_http_info` method hands back.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub headers: Headers,
    pub data: T,
}

impl<T: serde::Serialize> ApiResponse<T> {
    /// Erase the payload type for envelope assembly.
    pub fn into_value(self) -> Result<ApiResponse<serde_json::Value>, ApiError> {
        Ok(ApiResponse {
            status_code: self.status_code,
            headers: self.headers,
            data: serde_json::to_value(self.data)?,
        })
    }
}

/// Shared client: transport plus the cross-cutting call plumbing.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Run a request, turning failure statuses into [`ApiError::Response`].
    pub(crate) async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let raw = self.transport.execute(request).await?;
        if raw.status >= 400 {
            return Err(ApiError::from_response(raw));
        }
        Ok(raw)
    }

    /// Run a request and deserialize the body into the operation's payload
    /// type. An empty body (202/204 responses) deserializes as JSON `null`.
    pub(crate) async fn execute_typed<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse<T>, ApiError> {
        let raw = self.execute(request).await?;
        let data: T = if raw.body.trim().is_empty() {
            serde_json::from_value(serde_json::Value::Null)?
        } else {
            serde_json::from_str(&raw.body)?
        };
        Ok(ApiResponse {
            status_code: raw.status,
            headers: raw.headers,
            data,
        })
    }

    /// Block until the tracked request reaches a terminal state.
    ///
    /// Polls `GET /requests/{id}/status` every `poll_interval` after an
    /// `initial_delay`, for at most `max_wait`. `DONE` resolves; `FAILED`
    /// rejects with the status message; exhausting the budget rejects with
    /// [`ApiError::WaitTimeout`].
    pub async fn wait_for_request(
        &self,
        request_id: &str,
        max_wait: Duration,
        poll_interval: Duration,
        initial_delay: Duration,
    ) -> Result<(), ApiError> {
        let started = Instant::now();
        tokio::time::sleep(initial_delay).await;
        loop {
            let raw = self
                .execute(ApiRequest::get(format!("/requests/{request_id}/status")))
                .await?;
            let status: RequestStatus = serde_json::from_str(&raw.body)?;
            let metadata = status.metadata.unwrap_or_default();
            match metadata.status {
                Some(RequestState::Done) => return Ok(()),
                Some(RequestState::Failed) => {
                    return Err(ApiError::RequestFailed {
                        request_id: request_id.to_string(),
                        message: metadata
                            .message
                            .unwrap_or_else(|| "no failure message".to_string()),
                    });
                }
                _ => {}
            }
            if started.elapsed() >= max_wait {
                return Err(ApiError::WaitTimeout {
                    request_id: request_id.to_string(),
                    waited: started.elapsed(),
                });
            }
            tokio::time::sleep(poll_interval).await;
        }
    }
}

/// Render a path parameter, keeping the original driver's behavior of
/// sending the literal segment `null` when the caller never bound one.
pub(crate) fn path_segment(value: &Option<impl Display>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::transport::stub::StubTransport;
    use super::*;

    fn client_with(stub: StubTransport) -> (ApiClient, Arc<StubTransport>) {
        let stub = Arc::new(stub);
        (ApiClient::new(stub.clone()), stub)
    }

    #[tokio::test]
    async fn failure_status_becomes_structured_error() {
        let (client, _stub) = client_with(StubTransport::new().reply(
            404,
            &[("content-type", "application/json")],
            r#"{"messages":[{"message":"not found"}]}"#,
        ));
        let err = client
            .execute(ApiRequest::get("/datacenters/missing"))
            .await
            .unwrap_err();
        match err {
            ApiError::Response {
                status_code,
                message,
                ..
            } => {
                assert_eq!(status_code, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected Response, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wait_polls_until_done() {
        let (client, stub) = client_with(
            StubTransport::new()
                .reply(200, &[], r#"{"metadata":{"status":"QUEUED"}}"#)
                .reply(200, &[], r#"{"metadata":{"status":"RUNNING"}}"#)
                .reply(200, &[], r#"{"metadata":{"status":"DONE"}}"#),
        );
        client
            .wait_for_request(
                "1a2b3c4d-5e6f-7890-abcd-ef1234567890",
                Duration::from_millis(500),
                Duration::from_millis(1),
                Duration::from_millis(1),
            )
            .await
            .unwrap();
        let requests = stub.requests();
        assert_eq!(requests.len(), 3);
        assert!(
            requests
                .iter()
                .all(|r| r.path == "/requests/1a2b3c4d-5e6f-7890-abcd-ef1234567890/status")
        );
    }

    #[tokio::test]
    async fn wait_rejects_failed_requests() {
        let (client, _stub) = client_with(StubTransport::new().reply(
            200,
            &[],
            r#"{"metadata":{"status":"FAILED","message":"volume limit reached"}}"#,
        ));
        let err = client
            .wait_for_request(
                "deadbeef-0000",
                Duration::from_millis(100),
                Duration::from_millis(1),
                Duration::from_millis(1),
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("volume limit reached"));
    }

    #[tokio::test]
    async fn wait_times_out_on_a_request_that_never_finishes() {
        let mut stub = StubTransport::new();
        for _ in 0..50 {
            stub = stub.reply(200, &[], r#"{"metadata":{"status":"RUNNING"}}"#);
        }
        let (client, _stub) = client_with(stub);
        let err = client
            .wait_for_request(
                "deadbeef-0000",
                Duration::from_millis(20),
                Duration::from_millis(1),
                Duration::from_millis(1),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::WaitTimeout { .. }));
    }

    #[test]
    fn path_segment_renders_null_for_unbound() {
        assert_eq!(path_segment(&None::<uuid::Uuid>), "null");
        let id = uuid::Uuid::parse_str("1a2b3c4d-5e6f-7890-abcd-ef1234567890").unwrap();
        assert_eq!(path_segment(&Some(id)), "1a2b3c4d-5e6f-7890-abcd-ef1234567890");
    }
}

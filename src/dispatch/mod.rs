//! The dispatch pipeline: resolve, bind, coerce, invoke, normalize.
//!
//! [`Dispatcher::dispatch`] is the single entry point. The `waitForRequest`
//! pseudo-operation short-circuits to the poll adapter; every other
//! operation goes through the catalog. Whatever happens, the outcome is one
//! [`Envelope`].

pub mod binder;
pub mod catalog;
pub mod coerce;
pub mod normalize;
pub mod ops;
pub mod wait;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::envelope::Envelope;
use crate::error::DispatchError;
use crate::input::Request;

pub use binder::BindMode;

pub struct Dispatcher {
    client: ApiClient,
    catalog: catalog::Catalog,
    mode: BindMode,
}

impl Dispatcher {
    /// Build the catalog and keep it for the lifetime of the run.
    pub fn new(client: ApiClient, mode: BindMode) -> Result<Self, DispatchError> {
        let catalog = catalog::Catalog::new()?;
        debug!(operations = catalog.len(), "catalog built");
        Ok(Self {
            client,
            catalog,
            mode,
        })
    }

    /// Run one request to completion. Every error is recovered into a
    /// failure envelope; this function cannot fail.
    pub async fn dispatch(&self, request: &Request) -> Envelope {
        match self.try_dispatch(request).await {
            Ok(envelope) => envelope,
            Err(error) => {
                warn!(%error, "dispatch failed");
                normalize::failure(&error)
            }
        }
    }

    async fn try_dispatch(&self, request: &Request) -> Result<Envelope, DispatchError> {
        let operation = request.operation();
        if operation == wait::WAIT_FOR_REQUEST {
            return wait::wait_for_request(&self.client, request.params()).await;
        }

        let entry = self.catalog.resolve(operation)?;
        debug!(operation, "resolved operation");

        let args: Vec<Value> = binder::bind(self.mode, entry.params(), request.params());
        let response = entry.call(&self.client, &args).await?;
        info!(operation, status = response.status_code, "call completed");

        Ok(normalize::success(response))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};

    use super::*;
    use crate::api::transport::stub::StubTransport;

    fn dispatcher_with(stub: StubTransport) -> (Dispatcher, Arc<StubTransport>) {
        let stub = Arc::new(stub);
        let dispatcher =
            Dispatcher::new(ApiClient::new(stub.clone()), BindMode::ByName).unwrap();
        (dispatcher, stub)
    }

    fn request(document: &str) -> Request {
        let request = Request::parse(document).unwrap();
        request.validate(BindMode::ByName).unwrap();
        request
    }

    #[tokio::test]
    async fn volumes_get_round_trip() {
        let (dispatcher, stub) = dispatcher_with(StubTransport::new().reply(
            200,
            &[("content-type", "application/json")],
            r#"{"items":[]}"#,
        ));
        let envelope = dispatcher
            .dispatch(&request(
                r#"{"operation":"volumesGet","params":[{"name":"depth","value":1}]}"#,
            ))
            .await;

        assert!(envelope.error.is_none());
        let http = envelope.http_response.unwrap();
        assert_eq!(http.status_code, Some(200));
        assert_eq!(envelope.result, Some(json!({"items": []})));

        let sent = stub.requests();
        assert_eq!(sent.len(), 1);
        // datacenterId was never bound, so the path carries the null segment
        assert_eq!(sent[0].path, "/datacenters/null/volumes");
        assert!(sent[0].query.contains(&("depth".to_string(), "1".to_string())));
    }

    #[tokio::test]
    async fn unknown_operation_yields_resolution_error() {
        let (dispatcher, stub) = dispatcher_with(StubTransport::new());
        let envelope = dispatcher
            .dispatch(&request(r#"{"operation":"doesNotExist","params":[]}"#))
            .await;

        assert!(envelope.http_response.is_none());
        assert!(envelope.result.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.message, "method doesNotExist not found");
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn capitalized_parameter_binds_like_exact() {
        let reply = || {
            StubTransport::new().reply(200, &[], r#"{"id":"v-1"}"#)
        };
        let exact_doc = r#"{"operation":"volumesFindById","params":[
            {"name":"datacenterId","value":"11111111-2222-3333-4444-555555555555"},
            {"name":"volumeId","value":"1a2b3c4d-5e6f-7890-abcd-ef1234567890"}]}"#;
        let capitalized_doc = r#"{"operation":"volumesFindById","params":[
            {"name":"DatacenterId","value":"11111111-2222-3333-4444-555555555555"},
            {"name":"VolumeId","value":"1a2b3c4d-5e6f-7890-abcd-ef1234567890"}]}"#;

        let (dispatcher, stub) = dispatcher_with(reply());
        dispatcher.dispatch(&request(exact_doc)).await;
        let exact_path = stub.requests()[0].path.clone();

        let (dispatcher, stub) = dispatcher_with(reply());
        dispatcher.dispatch(&request(capitalized_doc)).await;
        let capitalized_path = stub.requests()[0].path.clone();

        assert_eq!(exact_path, capitalized_path);
        assert_eq!(
            exact_path,
            "/datacenters/11111111-2222-3333-4444-555555555555/volumes/1a2b3c4d-5e6f-7890-abcd-ef1234567890"
        );
    }

    #[tokio::test]
    async fn coercion_failure_surfaces_before_any_call() {
        let (dispatcher, stub) = dispatcher_with(StubTransport::new());
        let envelope = dispatcher
            .dispatch(&request(
                r#"{"operation":"volumesGet","params":[{"name":"depth","value":"deep"}]}"#,
            ))
            .await;

        assert!(envelope.http_response.is_none());
        let error = envelope.error.unwrap();
        assert_eq!(error.message, "parameter 'depth': expected integer, got string");
        assert!(error.stack_trace.is_some());
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_mirrors_status_into_both_payloads() {
        let (dispatcher, _stub) = dispatcher_with(StubTransport::new().reply(
            404,
            &[("content-type", "application/json")],
            r#"{"messages":[{"errorCode":"100","message":"not found"}]}"#,
        ));
        let envelope = dispatcher
            .dispatch(&request(
                r#"{"operation":"volumesGet","params":[{"name":"depth","value":1}]}"#,
            ))
            .await;

        let http = envelope.http_response.unwrap();
        assert_eq!(http.status_code, Some(404));
        let error = envelope.error.unwrap();
        assert_eq!(error.api_response.unwrap().status_code, Some(404));
        assert_eq!(error.message, "not found");
        assert!(envelope.result.is_none());
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_envelopes() {
        let reply = || {
            StubTransport::new().reply(
                200,
                &[("x-foo", "a"), ("location", "b")],
                r#"{"items":[]}"#,
            )
        };
        let document =
            r#"{"operation":"volumesGet","params":[{"name":"depth","value":1}]}"#;

        let (dispatcher, _stub) = dispatcher_with(reply());
        let first = dispatcher.dispatch(&request(document)).await;
        let (dispatcher, _stub) = dispatcher_with(reply());
        let second = dispatcher.dispatch(&request(document)).await;

        assert_eq!(first.render(), second.render());
        let rendered: Value = serde_json::from_str(&first.render()).unwrap();
        assert_eq!(rendered["httpResponse"]["headers"]["X-Foo"], json!(["a"]));
        assert_eq!(rendered["httpResponse"]["headers"]["Location"], json!(["b"]));
    }

    #[tokio::test]
    async fn wait_for_request_extracts_id_and_polls() {
        let (dispatcher, stub) = dispatcher_with(
            StubTransport::new().reply(200, &[], r#"{"metadata":{"status":"DONE"}}"#),
        );
        let envelope = dispatcher
            .dispatch(&request(
                r#"{"operation":"waitForRequest","params":[{"name":"request","value":"https://api.example.com/1a2b3c4d-5e6f-7890-abcd-ef1234567890/status"}]}"#,
            ))
            .await;

        assert_eq!(envelope, Envelope::default());
        let sent = stub.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].path,
            "/requests/1a2b3c4d-5e6f-7890-abcd-ef1234567890/status"
        );
    }

    #[tokio::test]
    async fn wait_for_request_without_request_param_is_a_precondition_failure() {
        let (dispatcher, stub) = dispatcher_with(StubTransport::new());
        let envelope = dispatcher
            .dispatch(&request(r#"{"operation":"waitForRequest","params":[]}"#))
            .await;

        let error = envelope.error.unwrap();
        assert_eq!(error.message, "'request' parameter is missing");
        assert!(stub.requests().is_empty());
    }

    #[tokio::test]
    async fn structured_body_parameter_reaches_the_wire() {
        let (dispatcher, stub) = dispatcher_with(StubTransport::new().reply(
            202,
            &[("location", "https://api.example.com/requests/abc-123/status")],
            r#"{"id":"vol-9","type":"VOLUME"}"#,
        ));
        let envelope = dispatcher
            .dispatch(&request(
                r#"{"operation":"volumesPost","params":[
                    {"name":"datacenterId","value":"11111111-2222-3333-4444-555555555555"},
                    {"name":"volume","value":{"properties":{"name":"data","size":20.0,"type":"SSD"}}}
                ]}"#,
            ))
            .await;

        let sent = stub.requests();
        assert_eq!(sent.len(), 1);
        let body = sent[0].body.clone().unwrap();
        assert_eq!(body["properties"]["name"], "data");
        assert_eq!(body["properties"]["size"], json!(20.0));

        // the symbolic VOLUME in the reply is rewritten to its wire value
        assert_eq!(envelope.result.unwrap()["type"], "volume");
    }

    #[tokio::test]
    async fn string_parameters_become_query_values() {
        let (dispatcher, stub) = dispatcher_with(StubTransport::new().reply(
            202,
            &[],
            r#"{"id":"snap-1","type":"SNAPSHOT"}"#,
        ));
        let envelope = dispatcher
            .dispatch(&request(
                r#"{"operation":"volumesCreateSnapshotPost","params":[
                    {"name":"datacenterId","value":"11111111-2222-3333-4444-555555555555"},
                    {"name":"volumeId","value":"1a2b3c4d-5e6f-7890-abcd-ef1234567890"},
                    {"name":"name","value":"nightly"},
                    {"name":"description","value":"pre-upgrade snapshot"}
                ]}"#,
            ))
            .await;

        assert!(envelope.error.is_none());
        assert_eq!(envelope.result.unwrap()["type"], "snapshot");
        let sent = stub.requests();
        assert!(sent[0].path.ends_with("/create-snapshot"));
        assert!(sent[0].query.contains(&("name".to_string(), "nightly".to_string())));
        assert!(
            sent[0]
                .query
                .contains(&("description".to_string(), "pre-upgrade snapshot".to_string()))
        );
    }

    #[tokio::test]
    async fn positional_mode_drains_the_defaults_table() {
        let stub = Arc::new(StubTransport::new().reply(200, &[], r#"{"items":[]}"#));
        let dispatcher =
            Dispatcher::new(ApiClient::new(stub.clone()), BindMode::Positional).unwrap();
        // datacentersGet declares pretty, depth, xContractNumber, offset,
        // limit; with nothing supplied the whole defaults table is consumed.
        let envelope = dispatcher
            .dispatch(&request(r#"{"operation":"datacentersGet","params":[]}"#))
            .await;

        assert!(envelope.error.is_none());
        let sent = stub.requests();
        let query = &sent[0].query;
        assert!(query.contains(&("pretty".to_string(), "true".to_string())));
        assert!(query.contains(&("depth".to_string(), "1".to_string())));
        assert!(query.contains(&("offset".to_string(), "0".to_string())));
        assert!(query.contains(&("limit".to_string(), "100".to_string())));
        let contract: Vec<_> = sent[0]
            .headers
            .iter()
            .filter(|(name, _)| name == "X-Contract-Number")
            .collect();
        assert_eq!(contract.len(), 1);
        assert_eq!(contract[0].1, "1");
    }
}

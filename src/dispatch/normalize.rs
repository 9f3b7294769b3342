//! Response normalization: every outcome into the one envelope shape.
//!
//! Two quirks of the generated client are smoothed over here: its raw
//! header map uses whatever casing the wire delivered, and its in-memory
//! enum representation serializes symbolically (`"DATACENTER"`) while
//! callers expect the lowercase wire value (`"datacenter"`).

use serde_json::Value;

use crate::api::{ApiError, ApiResponse, Headers};
use crate::envelope::{Envelope, ErrorPayload, HttpResponsePayload};
use crate::error::DispatchError;
use crate::model::ResourceType;

/// Success envelope: transport data into `httpResponse`, payload into
/// `result` with enum-like `type` fields rewritten to their wire form.
pub fn success(response: ApiResponse<Value>) -> Envelope {
    let body = (!response.data.is_null()).then(|| response.data.to_string());
    let mut result = response.data;
    rewrite_enum_types(&mut result);
    Envelope {
        http_response: Some(HttpResponsePayload {
            status_code: Some(response.status_code),
            headers: Some(canonicalize_headers(response.headers)),
            body,
        }),
        result: Some(result),
        error: None,
    }
}

/// Failure envelope. A structured transport failure mirrors the response
/// data into both `httpResponse` and `error.apiResponse`; everything else
/// carries only a message and the cause chain. `result` stays null on every
/// failure path.
pub fn failure(error: &DispatchError) -> Envelope {
    match error {
        DispatchError::Api(ApiError::Response {
            status_code,
            headers,
            body,
            message,
        }) => {
            let payload = HttpResponsePayload {
                status_code: Some(*status_code),
                headers: Some(canonicalize_headers(headers.clone())),
                body: Some(body.clone()),
            };
            Envelope {
                http_response: Some(payload.clone()),
                result: None,
                error: Some(ErrorPayload {
                    message: message.clone(),
                    api_response: Some(payload),
                    stack_trace: None,
                }),
            }
        }
        other => Envelope {
            http_response: None,
            result: None,
            error: Some(ErrorPayload {
                message: other.to_string(),
                api_response: None,
                stack_trace: Some(stack_frames(other)),
            }),
        },
    }
}

/// The error rendered followed by its cause chain, outermost first.
/// Consecutive identical frames (from transparent wrappers) collapse.
fn stack_frames(error: &dyn std::error::Error) -> Vec<String> {
    let mut frames = vec![error.to_string()];
    let mut current = error.source();
    while let Some(cause) = current {
        let rendered = cause.to_string();
        if frames.last() != Some(&rendered) {
            frames.push(rendered);
        }
        current = cause.source();
    }
    frames
}

/// Canonical hyphenated capitalization: the first letter of each
/// `-`-separated word is uppercased (`x-rate-limit` -> `X-Rate-Limit`).
pub fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

fn canonicalize_headers(headers: Headers) -> Headers {
    headers
        .into_iter()
        .map(|(name, values)| (canonical_header_name(&name), values))
        .collect()
}

/// Rewrite every `type` field holding a known symbolic enum name to its
/// lowercase wire value, recursively through objects and arrays.
fn rewrite_enum_types(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter_mut() {
                if key == "type"
                    && let Value::String(symbol) = child
                    && let Some(resource_type) = ResourceType::from_symbol(symbol)
                {
                    *child = Value::String(resource_type.wire_value().to_string());
                } else {
                    rewrite_enum_types(child);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                rewrite_enum_types(item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> Headers {
        let mut map = Headers::new();
        for (name, value) in pairs {
            map.entry((*name).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn header_names_are_canonicalized() {
        assert_eq!(canonical_header_name("location"), "Location");
        assert_eq!(canonical_header_name("x-rate-limit"), "X-Rate-Limit");
        assert_eq!(canonical_header_name("etag"), "Etag");
    }

    #[test]
    fn success_envelope_carries_status_headers_and_result() {
        let envelope = success(ApiResponse {
            status_code: 200,
            headers: headers(&[("x-foo", "a"), ("location", "b")]),
            data: json!({"items": []}),
        });
        let http = envelope.http_response.unwrap();
        assert_eq!(http.status_code, Some(200));
        let normalized = http.headers.unwrap();
        assert_eq!(normalized["X-Foo"], vec!["a"]);
        assert_eq!(normalized["Location"], vec!["b"]);
        assert_eq!(http.body.as_deref(), Some(r#"{"items":[]}"#));
        assert_eq!(envelope.result, Some(json!({"items": []})));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn enum_type_fields_are_rewritten_to_wire_values() {
        let envelope = success(ApiResponse {
            status_code: 200,
            headers: Headers::new(),
            data: json!({
                "type": "DATACENTER",
                "items": [
                    {"type": "VOLUME", "properties": {"type": "SSD"}},
                    {"type": "REQUEST_STATUS"}
                ]
            }),
        });
        let result = envelope.result.unwrap();
        assert_eq!(result["type"], "datacenter");
        assert_eq!(result["items"][0]["type"], "volume");
        // "SSD" is not a resource kind and must pass through untouched
        assert_eq!(result["items"][0]["properties"]["type"], "SSD");
        assert_eq!(result["items"][1]["type"], "request-status");
    }

    #[test]
    fn structured_failure_mirrors_the_response_twice() {
        let error = DispatchError::Api(ApiError::Response {
            status_code: 404,
            headers: headers(&[("content-type", "application/json")]),
            body: r#"{"messages":[{"message":"not found"}]}"#.to_string(),
            message: "not found".to_string(),
        });
        let envelope = failure(&error);
        let http = envelope.http_response.unwrap();
        assert_eq!(http.status_code, Some(404));
        let payload = envelope.error.unwrap();
        assert_eq!(payload.message, "not found");
        assert_eq!(payload.api_response.unwrap().status_code, Some(404));
        assert!(envelope.result.is_none());
    }

    #[test]
    fn resolution_failure_has_no_http_response() {
        let envelope = failure(&DispatchError::OperationNotFound("doesNotExist".to_string()));
        assert!(envelope.http_response.is_none());
        assert!(envelope.result.is_none());
        let payload = envelope.error.unwrap();
        assert_eq!(payload.message, "method doesNotExist not found");
        assert_eq!(
            payload.stack_trace.unwrap(),
            vec!["method doesNotExist not found".to_string()]
        );
    }

    #[test]
    fn header_normalization_is_order_independent() {
        let forward = success(ApiResponse {
            status_code: 200,
            headers: headers(&[("x-foo", "a"), ("location", "b")]),
            data: json!(null),
        });
        let reverse = success(ApiResponse {
            status_code: 200,
            headers: headers(&[("location", "b"), ("x-foo", "a")]),
            data: json!(null),
        });
        assert_eq!(forward.render(), reverse.render());
    }

    #[test]
    fn null_payload_serializes_without_a_body() {
        let envelope = success(ApiResponse {
            status_code: 202,
            headers: Headers::new(),
            data: json!(null),
        });
        let http = envelope.http_response.unwrap();
        assert!(http.body.is_none());
        assert_eq!(envelope.result, Some(Value::Null));
    }

    #[test]
    fn cause_chains_become_frames() {
        let error = DispatchError::param("depth", "expected integer, got string");
        let envelope = failure(&error);
        let payload = envelope.error.unwrap();
        assert_eq!(
            payload.message,
            "parameter 'depth': expected integer, got string"
        );
        assert_eq!(payload.stack_trace.unwrap().len(), 1);
    }
}

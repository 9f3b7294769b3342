//! Wire seam for the client library.
//!
//! Every call goes through the [`Transport`] trait as a plain
//! [`ApiRequest`]/[`RawResponse`] pair. Production uses [`HttpTransport`]
//! (reqwest over TLS with the configured auth scheme); tests swap in the
//! canned-response stub below without touching the network.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use url::Url;

use crate::api::error::ApiError;
use crate::config::Credentials;

/// Response headers, keyed by name with one entry per repeated header.
///
/// Ordered map so envelope serialization is deterministic regardless of how
/// the wire delivered them.
pub type Headers = BTreeMap<String, Vec<String>>;

/// One API call, described independently of the HTTP library.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        let mut request = Self::new(Method::POST, path);
        request.body = Some(body);
        request
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter when a value was supplied.
    pub fn query(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Append a request header when a value was supplied.
    pub fn header(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.headers.push((name.to_string(), value.to_string()));
        }
        self
    }
}

/// Status, headers and body exactly as they came off the wire.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// Production transport: reqwest against the configured endpoint.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
    credentials: Credentials,
}

impl HttpTransport {
    pub fn new(
        endpoint: Url,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("sdk-driver/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint,
            credentials,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        // Paths are absolute below the endpoint; plain concatenation keeps
        // the endpoint's own base path (Url::join would discard it).
        let url = format!(
            "{}{}",
            self.endpoint.as_str().trim_end_matches('/'),
            request.path
        );

        let mut builder = self.http.request(request.method, url);
        builder = match &self.credentials {
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password))
            }
            Credentials::Token { token } => builder.bearer_auth(token),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let mut headers: Headers = BTreeMap::new();
        for name in response.headers().keys() {
            let values = response
                .headers()
                .get_all(name)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .map(str::to_string)
                .collect();
            headers.insert(name.as_str().to_string(), values);
        }
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

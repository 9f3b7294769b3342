//! Startup configuration: credentials, endpoint and transport tuning.
//!
//! Credentials come from the environment (`CLOUD_TOKEN`, or the
//! `CLOUD_USERNAME`/`CLOUD_PASSWORD` pair), optionally overridden per run by
//! the request document's `options` block. A missing credential set is fatal
//! at startup, not a per-request condition.

use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::input::RequestOptions;

pub const ENV_USERNAME: &str = "CLOUD_USERNAME";
pub const ENV_PASSWORD: &str = "CLOUD_PASSWORD";
pub const ENV_TOKEN: &str = "CLOUD_TOKEN";
pub const ENV_API_URL: &str = "CLOUD_API_URL";

const DEFAULT_ENDPOINT: &str = "https://api.cloud.example.com/v6";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CLOUD_USERNAME and CLOUD_PASSWORD or CLOUD_TOKEN env vars not set")]
    MissingCredentials,

    #[error("invalid CLOUD_API_URL: {source}")]
    InvalidEndpoint { source: url::ParseError },
}

/// Authentication scheme for the API transport. Token auth wins when both a
/// token and a basic pair are available.
#[derive(Debug, Clone)]
pub enum Credentials {
    Basic { username: String, password: String },
    Token { token: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoint: Url,
    pub timeout: Duration,
}

impl Config {
    /// Resolve configuration from the environment, letting the request's
    /// `options` block override individual fields for this run.
    pub fn resolve(options: Option<&RequestOptions>) -> Result<Self, ConfigError> {
        let options = options.cloned().unwrap_or_default();

        let username = non_empty(options.username).or_else(|| env_non_empty(ENV_USERNAME));
        let password = non_empty(options.password).or_else(|| env_non_empty(ENV_PASSWORD));
        let token = non_empty(options.token).or_else(|| env_non_empty(ENV_TOKEN));

        let credentials = if let Some(token) = token {
            Credentials::Token { token }
        } else if let (Some(username), Some(password)) = (username, password) {
            Credentials::Basic { username, password }
        } else {
            return Err(ConfigError::MissingCredentials);
        };

        let endpoint = match env_non_empty(ENV_API_URL) {
            Some(raw) => Url::parse(&raw).map_err(|source| ConfigError::InvalidEndpoint { source })?,
            None => Url::parse(DEFAULT_ENDPOINT)
                .map_err(|source| ConfigError::InvalidEndpoint { source })?,
        };

        let timeout = Duration::from_secs(options.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            credentials,
            endpoint,
            timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|v| non_empty(Some(v)))
}

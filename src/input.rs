//! The request document read from stdin.
//!
//! Shape: `{"operation": "<name>", "params": [{"name": ..., "value": ...},
//! ...], "options": {...}}`. `options` is an optional per-run override of
//! the environment-sourced credentials and HTTP timeout.

use serde::Deserialize;
use serde_json::Value;

use crate::dispatch::BindMode;
use crate::error::DispatchError;

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub operation: Option<String>,
    pub params: Option<Vec<Param>>,
    pub options: Option<RequestOptions>,
}

/// One named argument for the requested operation.
#[derive(Debug, Clone, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: Value,
}

/// Per-run overrides for credentials and transport tuning.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestOptions {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    /// HTTP timeout override, in seconds.
    pub timeout: Option<u64>,
}

impl Request {
    pub fn parse(raw: &str) -> Result<Self, DispatchError> {
        serde_json::from_str(raw)
            .map_err(|error| DispatchError::Input(format!("JSON decoding error: {error}")))
    }

    /// Precondition check before any dispatch is attempted. `params` may be
    /// empty but must be present, except in the legacy positional mode where
    /// the old drivers tolerated its absence.
    pub fn validate(&self, mode: BindMode) -> Result<(), DispatchError> {
        match &self.operation {
            Some(operation) if !operation.trim().is_empty() => {}
            _ => {
                return Err(DispatchError::Input(
                    "invalid input: 'operation' cannot be empty".to_string(),
                ));
            }
        }
        if self.params.is_none() && mode != BindMode::Positional {
            return Err(DispatchError::Input(
                "invalid input: 'params' cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The requested operation name. Empty only before [`Self::validate`].
    pub fn operation(&self) -> &str {
        self.operation.as_deref().unwrap_or("")
    }

    /// Supplied parameters, absent treated as empty.
    pub fn params(&self) -> &[Param] {
        self.params.as_deref().unwrap_or(&[])
    }
}

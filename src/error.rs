//! Dispatch-level error taxonomy.
//!
//! Every failure in the pipeline funnels into [`DispatchError`] and is
//! recovered at the dispatch boundary into the output envelope; nothing here
//! ever aborts the process without a JSON document on stdout.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// No catalog entry matches the requested operation name.
    #[error("method {0} not found")]
    OperationNotFound(String),

    /// Two registry entries claim the same operation name. Raised while the
    /// catalog is built, before any request is looked at.
    #[error("operation {0} is registered more than once")]
    AmbiguousOperation(String),

    /// A supplied value could not be coerced into the parameter's type.
    #[error("parameter '{name}': {reason}")]
    Param { name: String, reason: String },

    /// `waitForRequest` was invoked without its one required parameter.
    #[error("'request' parameter is missing")]
    MissingRequestParam,

    /// The `request` URL carries no extractable tracking identifier.
    #[error("invalid request URL: {0}")]
    InvalidRequestUrl(String),

    /// The stdin document is malformed or fails a precondition.
    #[error("{0}")]
    Input(String),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// Anything else that reaches the process boundary (I/O on stdin,
    /// runtime bring-up). Reported with message and cause chain, never a
    /// crash without an envelope.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl DispatchError {
    pub fn param(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Param {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

//! The method catalog: every callable operation, indexed by name.
//!
//! Instead of scanning the client library at runtime, each operation is an
//! explicit registry entry carrying its parameter schema and a typed call
//! adapter. The schema order matters: it is the only way parameter identity
//! is recovered when a caller binds positionally.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiClient, ApiResponse};
use crate::dispatch::ops;
use crate::error::DispatchError;

/// Target type of one declared parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Bool,
    Int,
    String,
    Uuid,
    DateTime,
    Object,
}

impl ParamType {
    /// Human-readable name used in coercion error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::String => "string",
            Self::Uuid => "unique identifier (UUID string)",
            Self::DateTime => "timestamp (RFC 3339 string)",
            Self::Object => "structured object",
        }
    }
}

/// One declared parameter: name and target type, in signature order.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
}

/// One callable catalog entry.
///
/// `call` owns the coercion of its arguments: the adapter knows the exact
/// signature of the client-library method it wraps, so argument types are
/// checked where the call is made rather than through any runtime
/// inspection.
#[async_trait]
pub trait Operation: Send + Sync + std::fmt::Debug {
    /// Operation name as callers spell it (`volumesGet`).
    fn name(&self) -> &'static str;

    /// Declared parameters, in signature order.
    fn params(&self) -> &'static [ParamSpec];

    /// Coerce `args` (aligned with [`Self::params`]) and perform the call.
    async fn call(
        &self,
        client: &ApiClient,
        args: &[Value],
    ) -> Result<ApiResponse<Value>, DispatchError>;
}

/// Name-indexed registry, built once per run and read-only afterwards.
#[derive(Debug)]
pub struct Catalog {
    entries: HashMap<&'static str, &'static dyn Operation>,
}

impl Catalog {
    /// Index the operation table. A duplicate name is a hard error, raised
    /// before any request is looked at.
    pub fn new() -> Result<Self, DispatchError> {
        Self::from_entries(ops::OPERATIONS)
    }

    fn from_entries(operations: &[&'static dyn Operation]) -> Result<Self, DispatchError> {
        let mut entries = HashMap::with_capacity(operations.len());
        for operation in operations {
            if entries.insert(operation.name(), *operation).is_some() {
                return Err(DispatchError::AmbiguousOperation(
                    operation.name().to_string(),
                ));
            }
        }
        Ok(Self { entries })
    }

    pub fn resolve(&self, operation: &str) -> Result<&'static dyn Operation, DispatchError> {
        self.entries
            .get(operation)
            .copied()
            .ok_or_else(|| DispatchError::OperationNotFound(operation.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_operation_resolves() {
        let catalog = Catalog::new().unwrap();
        for operation in ops::OPERATIONS {
            let resolved = catalog.resolve(operation.name()).unwrap();
            assert_eq!(resolved.name(), operation.name());
        }
        assert_eq!(catalog.len(), ops::OPERATIONS.len());
    }

    #[test]
    fn unknown_operation_reports_its_name() {
        let catalog = Catalog::new().unwrap();
        let err = catalog.resolve("doesNotExist").unwrap_err();
        assert_eq!(err.to_string(), "method doesNotExist not found");
    }

    #[test]
    fn parameter_names_and_types_stay_aligned() {
        for operation in ops::OPERATIONS {
            let params = operation.params();
            let mut names: Vec<&str> = params.iter().map(|p| p.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(
                names.len(),
                params.len(),
                "{} repeats a parameter name",
                operation.name()
            );
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        #[derive(Debug)]
        struct Dup;

        #[async_trait]
        impl Operation for Dup {
            fn name(&self) -> &'static str {
                "dup"
            }
            fn params(&self) -> &'static [ParamSpec] {
                &[]
            }
            async fn call(
                &self,
                _client: &ApiClient,
                _args: &[Value],
            ) -> Result<ApiResponse<Value>, DispatchError> {
                unreachable!("never dispatched in this test")
            }
        }

        static DUP: Dup = Dup;
        let err = Catalog::from_entries(&[&DUP, &DUP]).unwrap_err();
        assert_eq!(err.to_string(), "operation dup is registered more than once");
    }
}

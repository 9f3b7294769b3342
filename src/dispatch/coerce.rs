//! Parameter coercion: decoded JSON values into the exact types the
//! client-library signatures require.
//!
//! Rules, in priority order:
//! 1. a value whose JSON shape already matches the target scalar passes
//!    through unchanged;
//! 2. mappings and sequences deserialize recursively into structured model
//!    types;
//! 3. identifiers and timestamps arrive as strings and are parsed
//!    explicitly, since plain JSON decoding never produces them;
//! 4. anything else is a coercion error naming the parameter.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::dispatch::catalog::ParamSpec;
use crate::error::DispatchError;
use crate::model::{Datacenter, Volume};

/// Broad JSON shape of a decoded value, for error messages.
pub(crate) fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// Conversion from a decoded JSON value into one parameter type.
pub trait FromParam: Sized {
    fn from_param(value: &Value) -> Result<Self, String>;
}

impl FromParam for bool {
    fn from_param(value: &Value) -> Result<Self, String> {
        value
            .as_bool()
            .ok_or_else(|| format!("got {}", shape_of(value)))
    }
}

impl FromParam for i32 {
    fn from_param(value: &Value) -> Result<Self, String> {
        if let Some(n) = value.as_i64() {
            return i32::try_from(n).map_err(|_| format!("{n} is out of range"));
        }
        // JSON decoders hand over whole numbers as floats; accept them when
        // they carry no fractional part.
        if let Some(f) = value.as_f64()
            && f.fract() == 0.0
            && f >= f64::from(i32::MIN)
            && f <= f64::from(i32::MAX)
        {
            return Ok(f as i32);
        }
        Err(format!("got {}", shape_of(value)))
    }
}

impl FromParam for String {
    fn from_param(value: &Value) -> Result<Self, String> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| format!("got {}", shape_of(value)))
    }
}

impl FromParam for Uuid {
    fn from_param(value: &Value) -> Result<Self, String> {
        let raw = value
            .as_str()
            .ok_or_else(|| format!("got {}", shape_of(value)))?;
        Uuid::parse_str(raw).map_err(|error| format!("could not parse \"{raw}\": {error}"))
    }
}

impl FromParam for DateTime<Utc> {
    fn from_param(value: &Value) -> Result<Self, String> {
        let raw = value
            .as_str()
            .ok_or_else(|| format!("got {}", shape_of(value)))?;
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|error| format!("could not parse \"{raw}\": {error}"))
    }
}

/// Structured model types deserialize from mappings (or sequences) the way
/// the request body arrived: recursively, field by field.
macro_rules! object_param {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromParam for $ty {
            fn from_param(value: &Value) -> Result<Self, String> {
                match value {
                    Value::Object(_) | Value::Array(_) => {
                        serde_json::from_value(value.clone()).map_err(|error| error.to_string())
                    }
                    other => Err(format!("got {}", shape_of(other))),
                }
            }
        }
    )+};
}

object_param!(Datacenter, Volume);

/// Positional accessor over bound arguments, resolving each slot against its
/// schema entry so failures name the parameter.
pub struct Params<'a> {
    args: &'a [Value],
    specs: &'static [ParamSpec],
}

impl<'a> Params<'a> {
    pub fn new(args: &'a [Value], specs: &'static [ParamSpec]) -> Self {
        Self { args, specs }
    }

    /// Coerce the argument at `index`; an unbound (`null`) slot is `None`.
    pub fn opt<T: FromParam>(&self, index: usize) -> Result<Option<T>, DispatchError> {
        let Some(spec) = self.specs.get(index) else {
            return Err(DispatchError::param(
                format!("#{index}"),
                "argument has no schema entry",
            ));
        };
        let value = self.args.get(index).unwrap_or(&Value::Null);
        if value.is_null() {
            return Ok(None);
        }
        T::from_param(value).map(Some).map_err(|reason| {
            DispatchError::param(
                spec.name,
                format!("expected {}, {}", spec.ty.describe(), reason),
            )
        })
    }
}

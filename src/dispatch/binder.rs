//! Parameter binding: an unordered named-value bag into a positional
//! argument list aligned with an operation's declared parameters.

use serde_json::{Value, json};

use crate::dispatch::catalog::ParamSpec;
use crate::input::Param;

/// How supplied parameters are matched to declared ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BindMode {
    /// Match by declared name, trying the exact spelling first and the
    /// capitalized spelling second (`volumeId` also matches `VolumeId`).
    /// This is the authoritative mode.
    #[default]
    ByName,
    /// Deprecated compatibility mode: the Nth supplied value fills the Nth
    /// declared parameter, then the defaults table below is drained. Kept
    /// only for old harness payloads that predate named parameters.
    Positional,
}

/// Mandatory defaults the positional mode consumes once the supplied values
/// run out: pretty, depth, contractNumber, offset, limit. Drained strictly
/// in this order, one per remaining slot, regardless of which declared
/// parameter the slot belongs to.
fn positional_defaults() -> [Value; 5] {
    [json!(true), json!(1), json!(1), json!(0), json!(100)]
}

/// Produce one argument per declared parameter; slots that nothing fills
/// bind to `null`.
pub fn bind(mode: BindMode, specs: &[ParamSpec], supplied: &[Param]) -> Vec<Value> {
    match mode {
        BindMode::ByName => bind_by_name(specs, supplied),
        BindMode::Positional => bind_positional(specs, supplied),
    }
}

fn bind_by_name(specs: &[ParamSpec], supplied: &[Param]) -> Vec<Value> {
    specs
        .iter()
        .map(|spec| {
            lookup(supplied, spec.name)
                .or_else(|| lookup(supplied, &capitalize(spec.name)))
                .cloned()
                .unwrap_or(Value::Null)
        })
        .collect()
}

fn bind_positional(specs: &[ParamSpec], supplied: &[Param]) -> Vec<Value> {
    let mut defaults = positional_defaults().into_iter();
    specs
        .iter()
        .enumerate()
        .map(|(index, _)| match supplied.get(index) {
            Some(param) => param.value.clone(),
            None => defaults.next().unwrap_or(Value::Null),
        })
        .collect()
}

fn lookup<'a>(supplied: &'a [Param], name: &str) -> Option<&'a Value> {
    supplied
        .iter()
        .find(|param| param.name == name)
        .map(|param| &param.value)
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::catalog::ParamType;

    static SPECS: &[ParamSpec] = &[
        ParamSpec {
            name: "volumeId",
            ty: ParamType::Uuid,
        },
        ParamSpec {
            name: "pretty",
            ty: ParamType::Bool,
        },
        ParamSpec {
            name: "depth",
            ty: ParamType::Int,
        },
    ];

    fn param(name: &str, value: Value) -> Param {
        Param {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn by_name_matches_exact_spelling() {
        let args = bind(
            BindMode::ByName,
            SPECS,
            &[param("depth", json!(2)), param("volumeId", json!("v-1"))],
        );
        assert_eq!(args, vec![json!("v-1"), Value::Null, json!(2)]);
    }

    #[test]
    fn by_name_falls_back_to_capitalized_spelling() {
        let args = bind(BindMode::ByName, SPECS, &[param("VolumeId", json!("v-1"))]);
        assert_eq!(args[0], json!("v-1"));
    }

    #[test]
    fn capitalized_and_exact_bind_identically() {
        let exact = bind(BindMode::ByName, SPECS, &[param("volumeId", json!("v-1"))]);
        let capitalized = bind(BindMode::ByName, SPECS, &[param("VolumeId", json!("v-1"))]);
        assert_eq!(exact, capitalized);
    }

    #[test]
    fn unmatched_parameters_bind_null() {
        let args = bind(BindMode::ByName, SPECS, &[]);
        assert_eq!(args, vec![Value::Null, Value::Null, Value::Null]);
    }

    #[test]
    fn positional_fills_in_order_then_drains_defaults() {
        let args = bind(BindMode::Positional, SPECS, &[param("anything", json!("v-1"))]);
        // slot 0 from the supplied value, slots 1..3 from the defaults table
        assert_eq!(args, vec![json!("v-1"), json!(true), json!(1)]);
    }

    #[test]
    fn positional_defaults_run_out_to_null() {
        static WIDE: &[ParamSpec] = &[
            ParamSpec {
                name: "a",
                ty: ParamType::String,
            },
            ParamSpec {
                name: "b",
                ty: ParamType::String,
            },
            ParamSpec {
                name: "c",
                ty: ParamType::String,
            },
            ParamSpec {
                name: "d",
                ty: ParamType::String,
            },
            ParamSpec {
                name: "e",
                ty: ParamType::String,
            },
            ParamSpec {
                name: "f",
                ty: ParamType::String,
            },
        ];
        let args = bind(BindMode::Positional, WIDE, &[]);
        assert_eq!(
            args,
            vec![
                json!(true),
                json!(1),
                json!(1),
                json!(0),
                json!(100),
                Value::Null
            ]
        );
    }
}

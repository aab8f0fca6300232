//! Format decoders — each turns input text into the intermediate [`Value`] tree.
//!
//! The decoders are thin adapters over the collaborator crates. Each preserves
//! exactly the information the normalization passes need to see:
//!
//! - JSON keeps every number as its raw text ([`Value::Number`]) via
//!   serde_json's `arbitrary_precision` mode, so integer-vs-float resolution
//!   happens in one place instead of at parse time.
//! - YAML converts hash keys recursively, so non-string keys (`true:`, `1:`)
//!   survive into the tree for key normalization to judge.
//! - TOML keys are already strings; datetimes become their RFC 3339 string
//!   rendering, since no other supported format has a datetime type.
//!
//! Decode failures carry the collaborator's diagnostic verbatim.

use crate::error::{ConvertError, Result};
use crate::types::{Format, Value};
use yaml_rust2::{Yaml, YamlLoader};

/// Decode `input` in the given format into an intermediate value tree.
///
/// The returned tree is pre-normalization: JSON numbers are raw
/// [`Value::Number`] leaves and YAML mapping keys may be non-strings. Run
/// [`normalize_keys`](crate::normalize_keys) and
/// [`normalize_numbers`](crate::normalize_numbers) before encoding.
pub fn decode(input: &str, format: Format) -> Result<Value> {
    match format {
        Format::Toml => decode_toml(input),
        Format::Yaml => decode_yaml(input),
        Format::Json => decode_json(input),
    }
}

fn decode_json(input: &str) -> Result<Value> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| ConvertError::Decode {
            format: Format::Json,
            message: e.to_string(),
        })?;
    Ok(from_json(value))
}

/// JSON → intermediate. With `arbitrary_precision`, `Number::to_string` is
/// the original token with its digits intact, so nothing is rounded here.
fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.to_string()),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (Value::String(k), from_json(v)))
                .collect(),
        ),
    }
}

fn decode_yaml(input: &str) -> Result<Value> {
    let docs = YamlLoader::load_from_str(input).map_err(|e| ConvertError::Decode {
        format: Format::Yaml,
        message: e.to_string(),
    })?;
    // Empty input is an empty stream; a multi-document stream decodes to its
    // first document.
    match docs.into_iter().next() {
        Some(doc) => from_yaml(doc),
        None => Ok(Value::Null),
    }
}

/// YAML → intermediate. Hash keys are converted recursively and may be any
/// value; key normalization decides whether they are acceptable.
fn from_yaml(yaml: Yaml) -> Result<Value> {
    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Boolean(b) => Value::Bool(b),
        Yaml::Integer(i) => Value::Integer(i),
        Yaml::Real(raw) => match yaml_float(&raw) {
            Some(f) => Value::Float(f),
            // The loader only emits Real for scalars it resolved as floats;
            // keep the raw text as a string if resolution disagrees.
            None => Value::String(raw),
        },
        Yaml::String(s) => Value::String(s),
        Yaml::Array(items) => {
            Value::Sequence(items.into_iter().map(from_yaml).collect::<Result<_>>()?)
        }
        Yaml::Hash(entries) => {
            let mut mapping = Vec::with_capacity(entries.len());
            for (k, v) in entries {
                mapping.push((from_yaml(k)?, from_yaml(v)?));
            }
            Value::Mapping(mapping)
        }
        Yaml::Alias(_) | Yaml::BadValue => {
            return Err(ConvertError::Decode {
                format: Format::Yaml,
                message: "unresolvable YAML node".to_string(),
            })
        }
    })
}

/// Resolve a YAML float scalar, including the YAML 1.1 non-finite forms that
/// `f64::from_str` does not accept.
fn yaml_float(raw: &str) -> Option<f64> {
    match raw {
        ".inf" | "+.inf" | ".Inf" | "+.Inf" | ".INF" | "+.INF" => Some(f64::INFINITY),
        "-.inf" | "-.Inf" | "-.INF" => Some(f64::NEG_INFINITY),
        ".nan" | ".NaN" | ".NAN" => Some(f64::NAN),
        _ => raw.parse::<f64>().ok(),
    }
}

fn decode_toml(input: &str) -> Result<Value> {
    let value: toml::Value = input.parse().map_err(|e: toml::de::Error| {
        ConvertError::Decode {
            format: Format::Toml,
            message: e.to_string(),
        }
    })?;
    Ok(from_toml(value))
}

/// TOML → intermediate. A TOML document is always a table at the top level.
fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_toml).collect())
        }
        toml::Value::Table(table) => Value::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (Value::String(k), from_toml(v)))
                .collect(),
        ),
    }
}

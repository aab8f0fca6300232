//! Format encoders — each renders a normalized [`Value`] tree as text.
//!
//! The encoders expect the invariants the normalization passes establish:
//! every mapping key a string, every numeric leaf `Integer` or `Float` (or a
//! raw `Number` leaf left by the lossy fallback, carried through as its raw
//! text). They are public API, so a non-string key is still checked and
//! reported as an encode error rather than a panic.
//!
//! Number rendering is the load-bearing detail: an integer-valued float must
//! come out as digits, never in scientific notation.
//!
//! - JSON is pretty-printed with 2-space indentation.
//! - YAML floats are formatted with `f64`'s `Display` (full decimal digits)
//!   and pass through the emitter's `Real` scalar verbatim.
//! - TOML floats use the toml crate's own `Display`-based rendering.

use crate::error::{ConvertError, Result};
use crate::types::{Format, Value};
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

/// Encode a value tree as text in the given format.
pub fn encode(value: &Value, format: Format) -> Result<String> {
    match format {
        Format::Toml => encode_toml(value),
        Format::Yaml => encode_yaml(value),
        Format::Json => encode_json(value),
    }
}

fn encode_json(value: &Value) -> Result<String> {
    let json = to_json(value)?;
    serde_json::to_string_pretty(&json).map_err(|e| ConvertError::Encode {
        format: Format::Json,
        message: e.to_string(),
    })
}

fn to_json(value: &Value) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => match serde_json::Number::from_f64(*f) {
            Some(n) => serde_json::Value::Number(n),
            None => {
                return Err(ConvertError::Encode {
                    format: Format::Json,
                    message: format!("float {f} has no JSON representation"),
                })
            }
        },
        // Re-parsing keeps the raw token intact under arbitrary_precision.
        Value::Number(raw) => match raw.parse::<serde_json::Number>() {
            Ok(n) => serde_json::Value::Number(n),
            Err(e) => {
                return Err(ConvertError::Encode {
                    format: Format::Json,
                    message: format!("number {raw}: {e}"),
                })
            }
        },
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect::<Result<_>>()?)
        }
        Value::Mapping(entries) => {
            let mut map = serde_json::Map::with_capacity(entries.len());
            for (key, val) in entries {
                match key {
                    Value::String(k) => {
                        map.insert(k.clone(), to_json(val)?);
                    }
                    other => return Err(non_string_key(Format::Json, other)),
                }
            }
            serde_json::Value::Object(map)
        }
    })
}

fn encode_yaml(value: &Value) -> Result<String> {
    let yaml = to_yaml(value)?;
    let mut out = String::new();
    YamlEmitter::new(&mut out)
        .dump(&yaml)
        .map_err(|e| ConvertError::Encode {
            format: Format::Yaml,
            message: e.to_string(),
        })?;
    Ok(out)
}

fn to_yaml(value: &Value) -> Result<Yaml> {
    Ok(match value {
        Value::Null => Yaml::Null,
        Value::Bool(b) => Yaml::Boolean(*b),
        Value::Integer(i) => Yaml::Integer(*i),
        Value::Float(f) => Yaml::Real(yaml_float_repr(*f)),
        // Lossy-fallback leaf: the raw token is already a plain YAML scalar.
        Value::Number(raw) => Yaml::Real(raw.clone()),
        Value::String(s) => Yaml::String(s.clone()),
        Value::Sequence(items) => {
            Yaml::Array(items.iter().map(to_yaml).collect::<Result<_>>()?)
        }
        Value::Mapping(entries) => {
            let mut hash = Hash::new();
            for (key, val) in entries {
                match key {
                    Value::String(k) => {
                        hash.insert(Yaml::String(k.clone()), to_yaml(val)?);
                    }
                    other => return Err(non_string_key(Format::Yaml, other)),
                }
            }
            Yaml::Hash(hash)
        }
    })
}

/// YAML rendering of a float: the YAML 1.1 forms for non-finite values,
/// `Display` (full decimal digits, no exponent) otherwise. The emitter writes
/// `Real` scalars verbatim, so this string is the final rendering.
fn yaml_float_repr(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f == f64::INFINITY {
        ".inf".to_string()
    } else if f == f64::NEG_INFINITY {
        "-.inf".to_string()
    } else {
        format!("{f}")
    }
}

fn encode_toml(value: &Value) -> Result<String> {
    let toml_value = to_toml(value)?;
    toml::to_string(&toml_value).map_err(|e| ConvertError::Encode {
        format: Format::Toml,
        message: e.to_string(),
    })
}

fn to_toml(value: &Value) -> Result<toml::Value> {
    Ok(match value {
        Value::Null => {
            return Err(ConvertError::Encode {
                format: Format::Toml,
                message: "TOML has no null value".to_string(),
            })
        }
        Value::Bool(b) => toml::Value::Boolean(*b),
        Value::Integer(i) => toml::Value::Integer(*i),
        Value::Float(f) => toml::Value::Float(*f),
        // Lossy-fallback leaf: TOML has no type that can hold the token as a
        // number, so it is carried as a string.
        Value::Number(raw) => toml::Value::String(raw.clone()),
        Value::String(s) => toml::Value::String(s.clone()),
        Value::Sequence(items) => {
            toml::Value::Array(items.iter().map(to_toml).collect::<Result<_>>()?)
        }
        Value::Mapping(entries) => {
            let mut table = toml::map::Map::with_capacity(entries.len());
            for (key, val) in entries {
                match key {
                    Value::String(k) => {
                        table.insert(k.clone(), to_toml(val)?);
                    }
                    other => return Err(non_string_key(Format::Toml, other)),
                }
            }
            toml::Value::Table(table)
        }
    })
}

fn non_string_key(format: Format, key: &Value) -> ConvertError {
    ConvertError::Encode {
        format,
        message: format!("mapping key {} is not a string", key.describe()),
    }
}

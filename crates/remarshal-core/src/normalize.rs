//! The two normalization passes that reconcile decoder output with what the
//! encoders accept.
//!
//! Both are recursive descents over [`Value`] with the same shape; one acts
//! on mapping keys, the other on numeric leaves. They are pure structural
//! transforms: neither changes the set of keys, the length or order of a
//! sequence, or which leaves are numeric vs. string vs. boolean vs. null —
//! only the *representation* of keys and numbers changes.

use crate::error::{ConvertError, Result};
use crate::types::Value;

/// Require every mapping key in the tree to be a string.
///
/// YAML mappings may be keyed by booleans, integers, or even collections;
/// none of the target formats can represent such a document, so the whole
/// conversion fails rather than inventing a stringified key.
pub fn normalize_keys(value: Value) -> Result<Value> {
    match value {
        Value::Mapping(entries) => {
            let mut normalized = Vec::with_capacity(entries.len());
            for (key, val) in entries {
                match key {
                    Value::String(k) => normalized.push((Value::String(k), normalize_keys(val)?)),
                    other => {
                        return Err(ConvertError::NonStringKey {
                            key: other.describe(),
                        })
                    }
                }
            }
            Ok(Value::Mapping(normalized))
        }
        Value::Sequence(items) => Ok(Value::Sequence(
            items
                .into_iter()
                .map(normalize_keys)
                .collect::<Result<_>>()?,
        )),
        scalar => Ok(scalar),
    }
}

/// Resolve every raw [`Value::Number`] leaf to `Integer` or `Float`.
///
/// Conversion policy, in order: exact `i64` parse; then finite `f64` parse;
/// then leave the leaf unconverted. Preferring float over an error keeps
/// integers beyond the i64 range out of scientific notation, while the exact
/// parse keeps everything in range round-tripping as an integer. This pass
/// never fails — the worst case is the lossy leave-unconverted fallback.
pub fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Mapping(entries) => Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k, normalize_numbers(v)))
                .collect(),
        ),
        Value::Sequence(items) => {
            Value::Sequence(items.into_iter().map(normalize_numbers).collect())
        }
        Value::Number(raw) => resolve_number(raw),
        other => other,
    }
}

/// A parse that saturates to ±inf counts as a failure, not a float, so the
/// lossy fallback triggers for tokens like `1e999`.
fn resolve_number(raw: String) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Integer(i);
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() => Value::Float(f),
        _ => Value::Number(raw),
    }
}

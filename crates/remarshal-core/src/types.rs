//! The format-neutral value model and the closed format enumeration.

use std::fmt;

/// A format-neutral document value. Every decoder produces into this tree and
/// every encoder consumes from it.
///
/// Mirrors the common subset of the three formats but separates integers from
/// floats, and uses `Vec<(Value, Value)>` for mappings to maintain insertion
/// order without depending on `IndexMap`. Two shapes exist only between decode
/// and normalization:
///
/// - `Number` holds the raw text of a JSON number whose integer-vs-float
///   resolution is deferred to [`normalize_numbers`](crate::normalize_numbers).
/// - `Mapping` keys may be any `Value` straight out of the YAML decoder;
///   [`normalize_keys`](crate::normalize_keys) guarantees they are all
///   `String` before a tree reaches an encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// Raw decimal text of a number the JSON decoder left unresolved.
    Number(String),
    String(String),
    Sequence(Vec<Value>),
    /// Key-value pairs in insertion order.
    Mapping(Vec<(Value, Value)>),
}

impl Value {
    /// Short rendering for diagnostics: scalars show their value, collections
    /// their kind. Used when a mapping key turns out not to be a string.
    pub(crate) fn describe(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Number(raw) => raw.clone(),
            Value::String(s) => format!("{s:?}"),
            Value::Sequence(_) => "a sequence".to_string(),
            Value::Mapping(_) => "a mapping".to_string(),
        }
    }
}

/// The three supported serialization formats.
///
/// Selection is by canonical name only — exact, case-sensitive, no aliasing.
/// [`Format::from_name`] fails explicitly instead of falling back to a
/// sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// The canonical format names, in the order used in diagnostics.
    pub const NAMES: [&'static str; 3] = ["TOML", "YAML", "JSON"];

    /// Resolve a canonical format name.
    pub fn from_name(name: &str) -> Option<Format> {
        match name {
            "TOML" => Some(Format::Toml),
            "YAML" => Some(Format::Yaml),
            "JSON" => Some(Format::Json),
            _ => None,
        }
    }

    /// The canonical name of this format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Toml => "TOML",
            Format::Yaml => "YAML",
            Format::Json => "JSON",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

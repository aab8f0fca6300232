//! Error types for format conversion.

use crate::types::Format;
use thiserror::Error;

/// Errors that can occur while converting a document between formats.
///
/// Every stage fails fast: the caller receives either a complete converted
/// document or exactly one of these, never partial output.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input and output formats are the same — there is nothing to convert.
    #[error("input and output formats must differ")]
    SameFormat,

    /// The input format name is not one of the recognized names.
    #[error("invalid input format {0:?}: expected one of TOML, YAML, JSON")]
    InvalidInputFormat(String),

    /// The output format name is not one of the recognized names.
    #[error("invalid output format {0:?}: expected one of TOML, YAML, JSON")]
    InvalidOutputFormat(String),

    /// The input document was malformed. Carries the decoder's diagnostic.
    #[error("{format} decode error: {message}")]
    Decode { format: Format, message: String },

    /// A mapping key with no string representation. Raised by key
    /// normalization; the conversion aborts rather than inventing a
    /// stringified key.
    #[error("mapping key {key} is not a string")]
    NonStringKey { key: String },

    /// The encoder rejected the normalized tree — a format-specific
    /// constraint such as TOML's lack of null or of non-mapping top-level
    /// documents.
    #[error("{format} encode error: {message}")]
    Encode { format: Format, message: String },
}

/// Convenience alias used throughout remarshal-core.
pub type Result<T> = std::result::Result<T, ConvertError>;

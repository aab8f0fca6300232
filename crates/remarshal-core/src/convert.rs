//! The conversion entry point: validate formats, decode, normalize, encode.

use crate::decoder::decode;
use crate::encoder::encode;
use crate::error::{ConvertError, Result};
use crate::normalize::{normalize_keys, normalize_numbers};
use crate::types::Format;

/// Convert `input` from one format to another.
///
/// Format names are exact and case-sensitive: `"TOML"`, `"YAML"`, `"JSON"`.
/// Validation order: same-format first (compared as raw names, before
/// resolution), then the input name, then the output name. Input bytes must
/// be valid UTF-8; anything else is a decode failure.
///
/// The call is a pure function of its three arguments — no shared state, no
/// I/O, every intermediate tree local to the call — so it may be invoked
/// concurrently from multiple threads without locking.
///
/// # Example
/// ```
/// use remarshal_core::convert;
///
/// let toml = convert(br#"{"port": 8080}"#, "JSON", "TOML").unwrap();
/// assert_eq!(toml, "port = 8080\n");
/// ```
pub fn convert(input: &[u8], input_format: &str, output_format: &str) -> Result<String> {
    if input_format == output_format {
        return Err(ConvertError::SameFormat);
    }
    let from = Format::from_name(input_format)
        .ok_or_else(|| ConvertError::InvalidInputFormat(input_format.to_string()))?;
    let to = Format::from_name(output_format)
        .ok_or_else(|| ConvertError::InvalidOutputFormat(output_format.to_string()))?;

    let text = std::str::from_utf8(input).map_err(|e| ConvertError::Decode {
        format: from,
        message: e.to_string(),
    })?;

    let tree = decode(text, from)?;
    let tree = normalize_numbers(normalize_keys(tree)?);
    encode(&tree, to)
}

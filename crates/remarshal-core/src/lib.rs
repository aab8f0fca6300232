//! # remarshal-core
//!
//! Convert documents between **TOML**, **YAML**, and **JSON** while preserving
//! data shape and scalar value fidelity.
//!
//! Conversion is a pipeline over a format-neutral tree: decode into [`Value`],
//! normalize it (string-keyed mappings, fixed-width numbers), encode out. The
//! normalization passes are where the semantic risk lives: they keep large
//! integers out of scientific notation and refuse documents whose mapping
//! keys no target format can represent.
//!
//! ## Quick start
//!
//! ```rust
//! use remarshal_core::convert;
//!
//! // TOML → JSON (2-space indented by default)
//! let json = convert(b"answer = 42\n", "TOML", "JSON").unwrap();
//! assert_eq!(json, "{\n  \"answer\": 42\n}");
//!
//! // JSON → YAML
//! let yaml = convert(br#"{"name": "Alice"}"#, "JSON", "YAML").unwrap();
//! assert!(yaml.contains("name: Alice"));
//! ```
//!
//! ## Modules
//!
//! - [`convert`](convert()) — the dispatcher: validate, decode, normalize, encode
//! - [`decoder`] — per-format decoding into the intermediate tree
//! - [`normalize`] — the key and number normalization passes
//! - [`encoder`] — per-format rendering of a normalized tree
//! - [`error`] — the conversion error taxonomy
//! - [`types`] — the [`Value`] model and [`Format`] enumeration

pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod normalize;
pub mod types;

pub use convert::convert;
pub use decoder::decode;
pub use encoder::encode;
pub use error::{ConvertError, Result};
pub use normalize::{normalize_keys, normalize_numbers};
pub use types::{Format, Value};

//! Round-trip tests: convert a document to another format and back, then
//! compare the decoded value trees.
//!
//! Comparisons run on normalized trees, not on bytes — formatting is each
//! encoder's business. The known lossy cases (TOML has no null, YAML and
//! TOML do not distinguish an integer-valued float from an integer) get their
//! own tests documenting the loss instead of being swept into the helper.

use remarshal_core::{convert, decode, normalize_keys, normalize_numbers, Format, Value};

/// Decode + normalize, for value-level comparison.
fn tree(input: &str, format: Format) -> Value {
    let decoded = decode(input, format).expect("decode failed");
    normalize_numbers(normalize_keys(decoded).expect("key normalization failed"))
}

/// Assert that `doc` (in format `from`) survives a trip through `via` intact.
fn assert_roundtrip(doc: &str, from: &str, via: &str) {
    let there = convert(doc.as_bytes(), from, via)
        .unwrap_or_else(|e| panic!("{from} -> {via} failed: {e}\n  input: {doc}"));
    let back = convert(there.as_bytes(), via, from)
        .unwrap_or_else(|e| panic!("{via} -> {from} failed: {e}\n  intermediate: {there}"));
    let from_format = Format::from_name(from).expect("bad format name in test");
    assert_eq!(
        tree(doc, from_format),
        tree(&back, from_format),
        "Roundtrip {from} -> {via} -> {from} altered the document:\n  input: {doc}\n  via:   {there}\n  back:  {back}"
    );
}

// ============================================================================
// JSON <-> YAML (the full data model minus nothing: both carry null)
// ============================================================================

#[test]
fn json_yaml_flat_object() {
    assert_roundtrip(
        r#"{"name": "Alice", "age": 30, "active": true, "email": null}"#,
        "JSON",
        "YAML",
    );
}

#[test]
fn json_yaml_nested_structures() {
    assert_roundtrip(
        r#"{"server": {"host": "localhost", "ports": [8080, 8081]}, "tags": ["web", "api"]}"#,
        "JSON",
        "YAML",
    );
}

#[test]
fn json_yaml_numbers() {
    assert_roundtrip(
        r#"{"int": 42, "neg": -7, "frac": 3.14, "tiny": 0.001, "big": 9223372036854775807}"#,
        "JSON",
        "YAML",
    );
}

#[test]
fn json_yaml_keyword_like_strings() {
    // Strings that look like other scalar types must come back as strings.
    assert_roundtrip(
        r#"{"a": "true", "b": "null", "c": "42", "d": "3.14", "e": "", "f": "-1"}"#,
        "JSON",
        "YAML",
    );
}

#[test]
fn json_yaml_strings_needing_quotes() {
    assert_roundtrip(
        r#"{"colon": "key: value", "comma": "a, b", "hash": "c # d", "quote": "say \"hi\""}"#,
        "JSON",
        "YAML",
    );
}

#[test]
fn json_yaml_unicode_strings() {
    assert_roundtrip(r#"{"cafe": "café", "greeting": "你好"}"#, "JSON", "YAML");
}

#[test]
fn json_yaml_root_sequence() {
    assert_roundtrip(r#"[1, "two", true, null, [3, 4], {"five": 5}]"#, "JSON", "YAML");
}

#[test]
fn json_yaml_root_scalar() {
    assert_roundtrip("42", "JSON", "YAML");
}

#[test]
fn json_yaml_empty_object() {
    assert_roundtrip("{}", "JSON", "YAML");
}

#[test]
fn yaml_json_block_document() {
    assert_roundtrip(
        "name: demo\nreplicas: 3\nlabels:\n  tier: backend\n  env: prod\ncommand:\n  - run\n  - --verbose\n",
        "YAML",
        "JSON",
    );
}

// ============================================================================
// JSON <-> TOML (no nulls; top-level mappings only)
// ============================================================================

#[test]
fn json_toml_flat_object() {
    assert_roundtrip(
        r#"{"name": "Alice", "age": 30, "active": true, "score": 99.5}"#,
        "JSON",
        "TOML",
    );
}

#[test]
fn json_toml_scalars_before_tables() {
    // TOML renders scalar entries before sub-tables; keeping the source in
    // that order makes the comparison exact rather than merely set-equal.
    assert_roundtrip(
        r#"{"title": "demo", "owner": {"name": "Tom", "dob": "1979-05-27"}, "db": {"ports": [8000, 8001]}}"#,
        "JSON",
        "TOML",
    );
}

#[test]
fn json_toml_array_of_tables() {
    assert_roundtrip(
        r#"{"points": [{"x": 1, "y": 2}, {"x": 3, "y": 4}]}"#,
        "JSON",
        "TOML",
    );
}

#[test]
fn json_toml_integral_float_keeps_float_type() {
    // TOML writes 5.0 with its decimal point, so the distinction survives
    // this pair (unlike YAML).
    assert_roundtrip(r#"{"ratio": 5.0}"#, "JSON", "TOML");
}

#[test]
fn json_toml_empty_object() {
    assert_roundtrip("{}", "JSON", "TOML");
}

#[test]
fn toml_json_config_document() {
    assert_roundtrip(
        "title = \"example\"\n\n[server]\nhost = \"0.0.0.0\"\nport = 8080\nthreads = 4\n\n[[accounts]]\nuser = \"a\"\n\n[[accounts]]\nuser = \"b\"\n",
        "TOML",
        "JSON",
    );
}

// ============================================================================
// TOML <-> YAML
// ============================================================================

#[test]
fn toml_yaml_config_document() {
    assert_roundtrip(
        "name = \"svc\"\ndebug = false\nratio = 0.25\n\n[limits]\ncpu = 2\nmem = 512\n",
        "TOML",
        "YAML",
    );
}

#[test]
fn yaml_toml_mapping_document() {
    assert_roundtrip(
        "image: nginx\nreplicas: 2\nports:\n  - 80\n  - 443\n",
        "YAML",
        "TOML",
    );
}

// ============================================================================
// Documented lossy cases
// ============================================================================

#[test]
fn integral_float_collapses_to_integer_via_yaml() {
    // YAML renders 5.0 as bare digits, so the float-ness is lost on the way
    // back. This is the accepted YAML lossy case, pinned here on purpose.
    let yaml = convert(br#"{"ratio": 5.0}"#, "JSON", "YAML").unwrap();
    let back = convert(yaml.as_bytes(), "YAML", "JSON").unwrap();
    assert_eq!(tree(&back, Format::Json), tree(r#"{"ratio": 5}"#, Format::Json));
}

#[test]
fn toml_datetime_becomes_a_string_elsewhere() {
    let json = convert(b"ts = 1979-05-27T07:32:00Z\n", "TOML", "JSON").unwrap();
    assert_eq!(
        tree(&json, Format::Json),
        tree(r#"{"ts": "1979-05-27T07:32:00Z"}"#, Format::Json)
    );
}

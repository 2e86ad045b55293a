//! Presence-checked extraction helpers for loosely-structured JSON payloads.
//!
//! The catalog API returns different subsets of fields depending on the endpoint and has
//! renamed some fields between versions. These helpers never fabricate values: anything
//! absent, `null`, empty or of the wrong type is reported as `None` (or skipped, for lists).

use serde_json::Value;

/// Returns the first non-empty string found under any of `keys`, checked in order.
///
/// # Arguments
/// - `value` - JSON object to read from
/// - `keys` - Candidate field names in priority order
///
/// # Returns
/// - `Some(&str)` - Value of the first candidate holding a non-empty string
/// - `None` - No candidate is present as a non-empty string
pub fn first_string<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
}

/// Reads `key` as a string, treating `null` and empty strings as absent.
pub fn string(value: &Value, key: &str) -> Option<String> {
    first_string(value, &[key]).map(str::to_string)
}

/// Reads the `name` field of the object stored under `key`.
///
/// Used for `{"maker": {"name": "..."}}` style fields. Returns `None` when the outer key is
/// missing, is not an object, or has no string `name`.
pub fn nested_name(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(|inner| string(inner, "name"))
}

/// Collects the `name` field of every object in the array stored under `key`.
///
/// Entries without a string `name` are skipped; a missing or non-array field yields an
/// empty list.
pub fn names_in_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| string(entry, "name"))
                .collect()
        })
        .unwrap_or_default()
}

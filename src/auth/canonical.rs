//! Canonical parameter-string construction
//!
//! Some gateway integrations sign a form-style parameter set instead of a
//! JSON body. The canonical encoding built here must match the gateway's
//! reference implementation byte-for-byte or signatures will never verify:
//! filter, stringify, sort by key, then join as form-encoded `key=value`
//! pairs.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use std::collections::HashMap;

/// Form-encoding keeps the unreserved characters `-`, `_`, `.`, `~` and
/// percent-escapes everything else (spaces become `+`, handled below).
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the sorted, filtered, form-encoded parameter string that gets
/// hashed and signed for form-style requests.
pub fn canonical_query_string(params: &HashMap<String, Value>) -> String {
    let mut filtered: Vec<(&str, String)> = params
        .iter()
        .filter_map(|(key, value)| {
            // The signature's own slot must not be part of what it signs.
            if key == "sign" {
                return None;
            }
            let text = scalar_to_string(value)?;
            // Values rendering as "" or "0" are treated as absent. The
            // literal zero drop looks wrong but is required for wire
            // compatibility with the gateway's reference implementation;
            // do not "fix" it.
            if text.is_empty() || text == "0" {
                return None;
            }
            Some((key.as_str(), text))
        })
        .collect();

    filtered.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (key, value) in filtered {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&form_encode(key));
        out.push('=');
        out.push_str(&form_encode(&value));
    }
    out
}

/// Render a parameter value as its locale-independent default string form.
/// Null values are dropped entirely. Composite values are rendered as
/// compact JSON (the gateway only documents scalars here).
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Percent-encode one key or value with form-encoding rules.
fn form_encode(text: &str) -> String {
    // The encode set escapes spaces to %20; form encoding wants '+'.
    // A literal '%' in the input is escaped to %25 first, so any %20 in
    // the output can only have come from a space.
    utf8_percent_encode(text, FORM_ENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

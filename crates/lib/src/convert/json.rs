//! JSON encoding and decoding with formatting flags.
//!
//! A thin layer over serde_json that adds the encode-time conveniences the
//! Options container exposes through `to_json`: pretty printing, numeric
//! string conversion, and ASCII-safe escaping of non-ASCII text.

use serde_json::Value;

/// Flags controlling JSON encoding.
///
/// ```
/// # use optkit::convert::{EncodeFlags, encode};
/// # use serde_json::json;
/// let flags = EncodeFlags::new().pretty(true).numeric_check(true);
/// let out = encode(&json!({"port": "8080"}), &flags).unwrap();
/// assert!(out.contains("\"port\": 8080"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodeFlags {
    pretty: bool,
    numeric_check: bool,
    escape_unicode: bool,
}

impl EncodeFlags {
    /// Default flags: compact output, no value rewriting
    pub fn new() -> Self {
        Self::default()
    }

    /// Format the output with indents and newlines
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Convert numeric strings to numbers while encoding
    pub fn numeric_check(mut self, numeric_check: bool) -> Self {
        self.numeric_check = numeric_check;
        self
    }

    /// Escape non-ASCII characters as `\uXXXX` sequences
    pub fn escape_unicode(mut self, escape_unicode: bool) -> Self {
        self.escape_unicode = escape_unicode;
        self
    }
}

/// Encodes a value to a JSON string with the given flags
pub fn encode(value: &Value, flags: &EncodeFlags) -> crate::Result<String> {
    let rewritten;
    let value = if flags.numeric_check {
        rewritten = numeric_checked(value.clone());
        &rewritten
    } else {
        value
    };

    let out = if flags.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    Ok(if flags.escape_unicode {
        escape_non_ascii(&out)
    } else {
        out
    })
}

/// Decodes a JSON string
pub fn decode(json: &str) -> crate::Result<Value> {
    Ok(serde_json::from_str(json)?)
}

/// Tests whether a string is valid JSON
pub fn is_json(json: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(json).is_ok()
}

/// Rewrites numeric strings into numbers, recursively
fn numeric_checked(value: Value) -> Value {
    match value {
        Value::String(s) => match parse_numeric(&s) {
            Some(n) => Value::Number(n),
            None => Value::String(s),
        },
        Value::Array(items) => Value::Array(items.into_iter().map(numeric_checked).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, numeric_checked(v)))
                .collect(),
        ),
        other => other,
    }
}

fn parse_numeric(s: &str) -> Option<serde_json::Number> {
    // Reject anything f64::from_str would accept but JSON would not ("inf",
    // "NaN", leading/trailing whitespace)
    if s.is_empty()
        || !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(serde_json::Number::from(i));
    }
    s.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
}

/// Escapes every non-ASCII character in an encoded JSON string as `\uXXXX`.
///
/// Safe to apply to the whole document: non-ASCII bytes can only occur
/// inside string literals.
fn escape_non_ascii(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut [0u16; 2]) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

//! Canonical textual form for snapshot subjects.
//!
//! Verification compares byte-for-byte, so the serialized text must be
//! deterministic: object keys are emitted in lexicographic order at every
//! nesting depth, indentation is fixed at two spaces, and the text always
//! ends in exactly one `\n`. Two semantically equal values therefore produce
//! identical bytes regardless of insertion order or the platform the
//! baseline was committed from.

use serde::Serialize;
use serde_json::Value;

use crate::errors::SnapError;

/// Serialize any JSON-representable subject into canonical text.
pub fn to_canonical<T: Serialize>(subject: &T) -> Result<String, SnapError> {
    let value = serde_json::to_value(subject)?;
    Ok(canonical_json(&value))
}

/// Render a JSON value as canonical text.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out.push('\n');
    out
}

/// Normalize line endings so baselines checked out with CRLF translation
/// still compare equal to freshly rendered canonical text.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            // serde_json's map ordering depends on a feature flag, so sort
            // explicitly rather than trusting the build configuration.
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push_str("{\n");
            for (i, key) in keys.iter().enumerate() {
                indent(out, depth + 1);
                out.push_str(&Value::String((*key).clone()).to_string());
                out.push_str(": ");
                write_value(out, &map[*key], depth + 1);
                if i + 1 < keys.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, depth);
            out.push('}');
        }
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                indent(out, depth + 1);
                write_value(out, item, depth + 1);
                if i + 1 < items.len() {
                    out.push(',');
                }
                out.push('\n');
            }
            indent(out, depth);
            out.push(']');
        }
        // Scalars: serde_json's compact rendering is already deterministic
        // and handles string escaping.
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

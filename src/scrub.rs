//! Masking of volatile fields before snapshotting.
//!
//! Response payloads carry values that legitimately change between runs
//! (`Date` and `Last-Modified` headers, server-generated timestamps).
//! Masking them with a fixed placeholder keeps the canonical form stable
//! without discarding the field itself from the snapshot.

use serde_json::Value;

/// Placeholder written over masked values.
pub const MASK: &str = "XXX";

/// Returns a copy of `value` with every object entry whose key matches one
/// of `keys` (case-insensitively) replaced by [`MASK`]. Recurses through
/// nested objects and arrays.
pub fn mask_fields(value: &Value, keys: &[&str]) -> Value {
    match value {
        Value::Object(map) => {
            let masked = map
                .iter()
                .map(|(k, v)| {
                    if keys.iter().any(|key| key.eq_ignore_ascii_case(k)) {
                        (k.clone(), Value::String(MASK.to_string()))
                    } else {
                        (k.clone(), mask_fields(v, keys))
                    }
                })
                .collect();
            Value::Object(masked)
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|v| mask_fields(v, keys)).collect())
        }
        scalar => scalar.clone(),
    }
}

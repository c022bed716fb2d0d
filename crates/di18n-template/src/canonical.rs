//! Canonical template serialization
//!
//! Persisted templates are written with keys sorted lexicographically at
//! every level, except the reserved key which is always emitted first at
//! the root. Deterministic ordering gives clean diffs between revisions.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::node::{MAX_DEPTH, RESERVED_KEY};

/// Rebuild the template with canonical key ordering.
pub fn canonicalize(template: &Value) -> Result<Value> {
    let Value::Object(map) = template else {
        return sort_value(template, 0);
    };

    let mut out = Map::new();
    if let Some(declared) = map.get(RESERVED_KEY) {
        out.insert(RESERVED_KEY.to_string(), declared.clone());
    }

    let mut keys: Vec<_> = map.keys().filter(|k| *k != RESERVED_KEY).collect();
    keys.sort();
    for key in keys {
        if let Some(value) = map.get(key) {
            out.insert(key.clone(), sort_value(value, 1)?);
        }
    }
    Ok(Value::Object(out))
}

/// Canonical pretty-printed form (two-space indentation).
pub fn to_canonical_string(template: &Value) -> Result<String> {
    let canonical = canonicalize(template)?;
    Ok(serde_json::to_string_pretty(&canonical)?)
}

fn sort_value(value: &Value, depth: usize) -> Result<Value> {
    if depth >= MAX_DEPTH {
        return Err(Error::DepthExceeded { max: MAX_DEPTH });
    }

    match value {
        Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                if let Some(v) = map.get(key) {
                    sorted.insert(key.clone(), sort_value(v, depth + 1)?);
                }
            }
            Ok(Value::Object(sorted))
        }
        Value::Array(arr) => Ok(Value::Array(
            arr.iter()
                .map(|v| sort_value(v, depth + 1))
                .collect::<Result<_>>()?,
        )),
        other => Ok(other.clone()),
    }
}

//! Single-language projection of a template

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::node::{MAX_DEPTH, RESERVED_KEY, is_language_node, lang_key};

/// Derive the tree for one language tag.
///
/// Language nodes collapse to their `lang:<tag>` value, or to an empty
/// mapping when the tag is not populated yet. Structural keys recurse,
/// scalars and arrays pass through, and the reserved key never appears in
/// the output. The input is not mutated; the result is an independent copy.
pub fn project(template: &Value, tag: &str) -> Result<Value> {
    project_value(template, &lang_key(tag), 0)
}

fn project_value(value: &Value, key: &str, depth: usize) -> Result<Value> {
    if depth >= MAX_DEPTH {
        return Err(Error::DepthExceeded { max: MAX_DEPTH });
    }

    let Value::Object(map) = value else {
        return Ok(value.clone());
    };

    if is_language_node(map) {
        return Ok(map
            .get(key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new())));
    }

    let mut out = Map::new();
    for (child_key, child) in map {
        if child_key == RESERVED_KEY {
            continue;
        }
        out.insert(child_key.clone(), project_value(child, key, depth + 1)?);
    }
    Ok(Value::Object(out))
}

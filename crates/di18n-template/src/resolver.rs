//! Language set resolution
//!
//! The active language set for a reconciliation pass is the union of two
//! independent sources: tags discovered inside language nodes, and the
//! declared list persisted under the reserved key. Discovered tags come
//! first so templates created before the directive existed keep working.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::node::{MAX_DEPTH, RESERVED_KEY, is_language_node, tag_of};

/// Collect every tag appearing in a `lang:<tag>` key anywhere in the tree.
///
/// Depth-first, first-seen order, duplicates ignored. Language node values
/// are not descended into; only mappings under non-reserved keys are.
pub fn discovered_tags(template: &Value) -> Result<Vec<String>> {
    let mut tags = Vec::new();
    if let Value::Object(map) = template {
        walk(map, 0, &mut tags)?;
    }
    Ok(tags)
}

fn walk(map: &Map<String, Value>, depth: usize, tags: &mut Vec<String>) -> Result<()> {
    if depth >= MAX_DEPTH {
        return Err(Error::DepthExceeded { max: MAX_DEPTH });
    }

    if is_language_node(map) {
        for key in map.keys() {
            if let Some(tag) = tag_of(key)
                && !tags.iter().any(|t| t.as_str() == tag)
            {
                tags.push(tag.to_string());
            }
        }
        return Ok(());
    }

    for (key, value) in map {
        if key == RESERVED_KEY {
            continue;
        }
        if let Value::Object(child) = value {
            walk(child, depth + 1, tags)?;
        }
    }
    Ok(())
}

/// Read the declared language list from the reserved key.
///
/// Absent or malformed values (anything but an array of strings) yield an
/// empty list; duplicates are dropped.
pub fn declared_tags(template: &Value) -> Vec<String> {
    let Some(Value::Array(items)) = template.get(RESERVED_KEY) else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    for item in items {
        match item {
            Value::String(tag) => {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
            // Non-string entry: the whole directive is discarded
            _ => return Vec::new(),
        }
    }
    tags
}

/// The effective active set: discovered tags followed by declared tags,
/// de-duplicated.
pub fn active_tags(template: &Value) -> Result<Vec<String>> {
    let mut tags = discovered_tags(template)?;
    for tag in declared_tags(template) {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    Ok(tags)
}

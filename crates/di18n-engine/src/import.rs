//! Legacy single-language import
//!
//! Converts a flat one-language JSON document into a template skeleton by
//! wrapping every scalar and array leaf in a single-tag language node.

use serde_json::{Map, Value};

use di18n_template::{self as template, MAX_DEPTH, lang_key, reconcile};

use crate::error::Result;

/// Build a template seeded with a single language from a flat document.
pub fn import_legacy(flat: &Value, tag: &str) -> Result<Value> {
    if !flat.is_object() {
        return Err(template::Error::RootNotObject.into());
    }

    let mut out = wrap(flat, tag, 0)?;
    reconcile(&mut out, &[tag.to_string()])?;
    Ok(out)
}

fn wrap(value: &Value, tag: &str, depth: usize) -> Result<Value> {
    if depth >= MAX_DEPTH {
        return Err(template::Error::DepthExceeded { max: MAX_DEPTH }.into());
    }

    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, child) in map {
                out.insert(key.clone(), wrap(child, tag, depth + 1)?);
            }
            Ok(Value::Object(out))
        }
        leaf => {
            let mut node = Map::new();
            node.insert(lang_key(tag), leaf.clone());
            Ok(Value::Object(node))
        }
    }
}

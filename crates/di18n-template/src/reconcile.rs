//! In-place reconciliation of language nodes against an active tag set

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::node::{MAX_DEPTH, RESERVED_KEY, is_language_node, lang_key, tag_of};

/// Bring every language node in the template to exactly the active tag set.
///
/// Missing tags get an empty-string placeholder, retired tags are pruned,
/// existing entries are never overwritten. The reserved key is rewritten to
/// exactly `active` (order preserved). Idempotent: a second call with the
/// same set is a no-op.
pub fn reconcile(template: &mut Value, active: &[String]) -> Result<()> {
    let map = template.as_object_mut().ok_or(Error::RootNotObject)?;
    reconcile_map(map, active, 0)?;

    let declared = active.iter().map(|t| Value::String(t.clone())).collect();
    map.insert(RESERVED_KEY.to_string(), Value::Array(declared));
    Ok(())
}

fn reconcile_map(map: &mut Map<String, Value>, active: &[String], depth: usize) -> Result<()> {
    if depth >= MAX_DEPTH {
        return Err(Error::DepthExceeded { max: MAX_DEPTH });
    }

    if is_language_node(map) {
        for tag in active {
            map.entry(lang_key(tag))
                .or_insert_with(|| Value::String(String::new()));
        }
        // Prune retired languages; non-lang keys are left alone.
        map.retain(|key, _| match tag_of(key) {
            Some(tag) => active.iter().any(|t| t.as_str() == tag),
            None => true,
        });
        return Ok(());
    }

    for (key, value) in map.iter_mut() {
        if key == RESERVED_KEY {
            continue;
        }
        if let Value::Object(child) = value {
            reconcile_map(child, active, depth + 1)?;
        }
    }
    Ok(())
}

/// Structural copy of the template without the reserved key.
///
/// Revision comparison in the reconciliation loop works on these stripped
/// copies so that declared-list edits and content edits can be told apart.
pub fn strip_reserved(template: &Value) -> Value {
    let mut copy = template.clone();
    if let Some(map) = copy.as_object_mut() {
        map.remove(RESERVED_KEY);
    }
    copy
}

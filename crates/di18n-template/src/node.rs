//! Language node classification

use serde_json::{Map, Value};

/// Reserved top-level key holding the declared language list.
pub const RESERVED_KEY: &str = "dealerI18n:lang";

/// Key prefix marking a per-language entry inside a language node.
pub const LANG_PREFIX: &str = "lang:";

/// Maximum supported template nesting depth. Templates come from user-edited
/// files, so every recursive walk is bounded by this.
pub const MAX_DEPTH: usize = 128;

/// Returns true if the mapping is a language node.
///
/// A single `lang:` key classifies the whole node; any other keys in the
/// same node are retained but ignored by reconciliation and discovery.
pub fn is_language_node(map: &Map<String, Value>) -> bool {
    map.keys().any(|k| k.starts_with(LANG_PREFIX))
}

/// Build the `lang:<tag>` key for a tag.
pub fn lang_key(tag: &str) -> String {
    format!("{LANG_PREFIX}{tag}")
}

/// Extract the tag from a `lang:<tag>` key, if it is one.
pub fn tag_of(key: &str) -> Option<&str> {
    key.strip_prefix(LANG_PREFIX)
}

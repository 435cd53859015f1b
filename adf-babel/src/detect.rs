//! Detection of already-serialized document trees.

use serde_json::Value;

use crate::adf::Doc;

/// Decide whether a raw string field already holds a serialized document
/// tree.
///
/// Returns the parsed tree when the input is JSON whose root object carries
/// `"type": "doc"`. Plain author-entered text returns `None` and should go
/// through [`crate::encode`] or [`crate::encode_plain`] instead. This keeps
/// content that was produced by the encoder upstream from being converted
/// twice.
pub fn detect(input: &str) -> Option<Doc> {
    let trimmed = input.trim();
    if !trimmed.starts_with('{') {
        return None;
    }
    let value: Value = serde_json::from_str(trimmed).ok()?;
    if value.get("type").and_then(Value::as_str) != Some("doc") {
        return None;
    }
    Some(Doc::from_value(&value))
}

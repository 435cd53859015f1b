//! Core data structures for the Atlassian Document Format (ADF) tree.
//!
//! Serialization derives produce the literal wire shape the issue-tracking
//! API accepts (`type`/`attrs`/`content`/`text`/`marks` fields). Decoding of
//! externally sourced trees goes through [`Doc::from_value`], which is
//! deliberately lenient: missing fields fall back to documented defaults and
//! unrecognized node types are preserved in the [`Node::Unknown`] variant
//! instead of failing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::FormatError;

/// Root of an ADF document: `{"type": "doc", "version": 1, "content": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doc {
    #[serde(rename = "type")]
    doc_type: String,
    pub version: u64,
    pub content: Vec<Node>,
}

/// A single node in the document tree.
///
/// Closed sum type over the recognized vocabulary, with a catch-all
/// [`Node::Unknown`] variant holding the raw JSON of node types this crate
/// does not understand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Paragraph {
        content: Vec<Node>,
    },
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Node>,
    },
    CodeBlock {
        #[serde(skip_serializing_if = "Option::is_none")]
        attrs: Option<CodeBlockAttrs>,
        content: Vec<Node>,
    },
    BulletList {
        content: Vec<Node>,
    },
    OrderedList {
        content: Vec<Node>,
    },
    ListItem {
        content: Vec<Node>,
    },
    Blockquote {
        content: Vec<Node>,
    },
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        marks: Option<Vec<Mark>>,
    },
    HardBreak,
    #[serde(untagged)]
    Unknown(Value),
}

/// An inline formatting annotation attached to a text node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Strong,
    Em,
    Code,
    Link { attrs: LinkAttrs },
}

/// Attributes of a heading node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// Attributes of a code block node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlockAttrs {
    pub language: String,
}

/// Attributes of a link mark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkAttrs {
    pub href: String,
}

impl Doc {
    pub fn new(content: Vec<Node>) -> Doc {
        Doc {
            doc_type: "doc".to_string(),
            version: 1,
            content,
        }
    }

    pub fn empty() -> Doc {
        Doc::new(Vec::new())
    }

    /// Build a document from an externally sourced JSON value.
    ///
    /// Never fails: a null or malformed value yields an empty document, a
    /// missing version defaults to 1.
    pub fn from_value(value: &Value) -> Doc {
        let version = value.get("version").and_then(Value::as_u64).unwrap_or(1);
        let mut doc = Doc::new(child_nodes(value));
        doc.version = version;
        doc
    }

    /// Parse a serialized document from its JSON string form.
    ///
    /// This is the only fallible entry point; it errors on invalid JSON
    /// text, not on unexpected tree shapes.
    pub fn from_json(input: &str) -> Result<Doc, FormatError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| FormatError::ParseError(format!("invalid document JSON: {e}")))?;
        Ok(Doc::from_value(&value))
    }

    /// Serialize the document to its JSON string form.
    pub fn to_json(&self) -> Result<String, FormatError> {
        serde_json::to_string(self).map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

impl Default for Doc {
    fn default() -> Doc {
        Doc::empty()
    }
}

impl Node {
    /// A text node with no marks.
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text {
            text: text.into(),
            marks: None,
        }
    }

    /// A text node carrying the given marks; an empty mark list is omitted
    /// from the wire form entirely.
    pub fn text_with_marks(text: impl Into<String>, marks: Vec<Mark>) -> Node {
        Node::Text {
            text: text.into(),
            marks: if marks.is_empty() { None } else { Some(marks) },
        }
    }

    /// Convert an externally sourced JSON value into a node, leniently.
    pub fn from_value(value: &Value) -> Node {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or("");
        match kind {
            "paragraph" => Node::Paragraph {
                content: child_nodes(value),
            },
            "heading" => Node::Heading {
                attrs: HeadingAttrs {
                    level: heading_level(value),
                },
                content: child_nodes(value),
            },
            "codeBlock" => Node::CodeBlock {
                attrs: code_block_attrs(value),
                content: child_nodes(value),
            },
            "bulletList" => Node::BulletList {
                content: child_nodes(value),
            },
            "orderedList" => Node::OrderedList {
                content: child_nodes(value),
            },
            "listItem" => Node::ListItem {
                content: child_nodes(value),
            },
            "blockquote" => Node::Blockquote {
                content: child_nodes(value),
            },
            "text" => Node::Text {
                text: value
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
                marks: marks_from_value(value),
            },
            "hardBreak" => Node::HardBreak,
            _ => Node::Unknown(value.clone()),
        }
    }
}

impl Mark {
    fn from_value(value: &Value) -> Option<Mark> {
        match value.get("type").and_then(Value::as_str)? {
            "strong" => Some(Mark::Strong),
            "em" => Some(Mark::Em),
            "code" => Some(Mark::Code),
            "link" => {
                let href = value
                    .get("attrs")
                    .and_then(|attrs| attrs.get("href"))
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string();
                Some(Mark::Link {
                    attrs: LinkAttrs { href },
                })
            }
            // Unknown mark types are dropped; the text itself survives.
            _ => None,
        }
    }
}

/// Convert the `content` array of a JSON value, tolerating its absence.
pub(crate) fn child_nodes(value: &Value) -> Vec<Node> {
    value
        .get("content")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(Node::from_value).collect())
        .unwrap_or_default()
}

/// Heading level, accepting both integer and floating-point encodings.
///
/// The upstream API returns levels as either numeric type depending on the
/// path the tree took; missing or non-numeric levels default to 1.
fn heading_level(value: &Value) -> u8 {
    let level = value.get("attrs").and_then(|attrs| attrs.get("level"));
    let level = match level {
        Some(v) => v
            .as_u64()
            .or_else(|| v.as_f64().map(|f| f as u64))
            .unwrap_or(1),
        None => 1,
    };
    level.clamp(1, 6) as u8
}

fn code_block_attrs(value: &Value) -> Option<CodeBlockAttrs> {
    let language = value
        .get("attrs")
        .and_then(|attrs| attrs.get("language"))
        .and_then(Value::as_str)?;
    Some(CodeBlockAttrs {
        language: language.to_string(),
    })
}

fn marks_from_value(value: &Value) -> Option<Vec<Mark>> {
    let items = value.get("marks").and_then(Value::as_array)?;
    let marks: Vec<Mark> = items.iter().filter_map(Mark::from_value).collect();
    if marks.is_empty() {
        None
    } else {
        Some(marks)
    }
}

impl<'de> Deserialize<'de> for Doc {
    fn deserialize<D>(deserializer: D) -> Result<Doc, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Doc::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Node::from_value(&value))
    }
}

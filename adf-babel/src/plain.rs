//! Plain-text boundary codec
//!
//! A simpler, non-markdown-aware pair: raw text wrapped in the document
//! tree using only paragraph and hard-break rules. A blank line starts a
//! new paragraph, a single newline inside a paragraph becomes a hard
//! break, and empty paragraphs from leading or trailing blank lines are
//! dropped. Used when input should not be interpreted as markdown.

use crate::adf::{Doc, Node};

/// Encode raw text as a document tree without interpreting markdown.
pub fn encode_plain(text: &str) -> Doc {
    let mut paragraphs = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for line in text.split('\n') {
        if line.is_empty() {
            flush(&mut current, &mut paragraphs);
        } else {
            if !current.is_empty() {
                current.push(Node::HardBreak);
            }
            current.push(Node::text(line));
        }
    }
    flush(&mut current, &mut paragraphs);

    Doc::new(paragraphs)
}

fn flush(current: &mut Vec<Node>, paragraphs: &mut Vec<Node>) {
    if !current.is_empty() {
        paragraphs.push(Node::Paragraph {
            content: std::mem::take(current),
        });
    }
}

/// Decode a paragraph/hard-break tree back to raw text.
pub fn decode_plain(doc: &Doc) -> String {
    doc.content
        .iter()
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn paragraph_text(node: &Node) -> String {
    let content = match node {
        Node::Paragraph { content } => content.as_slice(),
        _ => return String::new(),
    };

    let mut out = String::new();
    for child in content {
        match child {
            Node::Text { text, .. } => out.push_str(text),
            Node::HardBreak => out.push('\n'),
            _ => {}
        }
    }
    out
}

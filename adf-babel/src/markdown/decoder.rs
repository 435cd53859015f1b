//! Markdown decoding (ADF → Markdown)
//!
//! Walks the document tree depth-first and re-serializes each block to its
//! markdown syntax. Decoding is total: empty documents yield the empty
//! string, malformed attributes fall back to their defaults, and unknown
//! node types degrade to best-effort inline rendering of their children.

use crate::adf::marks::wrap;
use crate::adf::nodes::child_nodes;
use crate::adf::{Doc, Node};

/// Decode a document tree to a markdown string.
pub fn decode(doc: &Doc) -> String {
    render_blocks(&doc.content, "\n\n")
}

fn render_blocks(nodes: &[Node], separator: &str) -> String {
    nodes
        .iter()
        .map(render_block)
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_block(node: &Node) -> String {
    match node {
        Node::Paragraph { content } => render_inline(content),

        Node::Heading { attrs, content } => {
            let level = attrs.level.clamp(1, 6) as usize;
            format!("{} {}", "#".repeat(level), render_inline(content))
        }

        Node::CodeBlock { attrs, content } => {
            let language = attrs.as_ref().map(|a| a.language.as_str()).unwrap_or("");
            let body: String = content
                .iter()
                .filter_map(|child| match child {
                    Node::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            format!("```{language}\n{body}\n```")
        }

        Node::BulletList { content } => content
            .iter()
            .map(|item| format!("- {}", item_text(item)))
            .collect::<Vec<_>>()
            .join("\n"),

        Node::OrderedList { content } => content
            .iter()
            .enumerate()
            .map(|(index, item)| format!("{}. {}", index + 1, item_text(item)))
            .collect::<Vec<_>>()
            .join("\n"),

        Node::ListItem { content } => item_blocks(content),

        Node::Blockquote { content } => {
            let rendered = render_blocks(content, "\n");
            rendered
                .lines()
                .map(|line| format!("> {line}"))
                .collect::<Vec<_>>()
                .join("\n")
        }

        Node::Text { .. } | Node::HardBreak => render_inline(std::slice::from_ref(node)),

        // Unknown block types fall back to inline rendering of whatever
        // content they carry.
        Node::Unknown(value) => render_inline(&child_nodes(value)),
    }
}

/// Inline text of one list item: its child blocks' inline renderings,
/// space-joined.
fn item_text(node: &Node) -> String {
    match node {
        Node::ListItem { content } => item_blocks(content),
        other => render_block(other),
    }
}

fn item_blocks(content: &[Node]) -> String {
    content
        .iter()
        .map(render_block)
        .filter(|rendered| !rendered.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_inline(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text { text, marks } => match marks {
                Some(marks) if !marks.is_empty() => out.push_str(&wrap(text, marks)),
                _ => out.push_str(text),
            },
            Node::HardBreak => out.push('\n'),
            Node::Unknown(value) => out.push_str(&render_inline(&child_nodes(value))),
            other => out.push_str(&render_inline(block_content(other))),
        }
    }
    out
}

fn block_content(node: &Node) -> &[Node] {
    match node {
        Node::Paragraph { content }
        | Node::Heading { content, .. }
        | Node::CodeBlock { content, .. }
        | Node::BulletList { content }
        | Node::OrderedList { content }
        | Node::ListItem { content }
        | Node::Blockquote { content } => content,
        Node::Text { .. } | Node::HardBreak | Node::Unknown(_) => &[],
    }
}

//! Markdown encoding (Markdown → ADF)
//!
//! Pipeline: Markdown string → Comrak AST → ADF tree + warnings.
//!
//! Encoding is best-effort by contract: it never fails. Block constructs
//! with no ADF counterpart are skipped and reported in the warning list;
//! unknown inline constructs are unwrapped into their children.

use std::collections::BTreeSet;

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

use crate::adf::marks::{consolidate, extended};
use crate::adf::{CodeBlockAttrs, Doc, HeadingAttrs, LinkAttrs, Mark, Node};

/// Encode a markdown string as a document tree.
///
/// Returns the tree and a deduplicated, alphabetically sorted list of
/// warnings naming the block types that could not be represented. The worst
/// case for any input is an empty tree with warnings, never an error.
pub fn encode(markdown: &str) -> (Doc, Vec<String>) {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, markdown, &options);

    let mut skipped = BTreeSet::new();
    let mut content = Vec::new();
    for child in root.children() {
        if let Some(node) = block_node(child, &mut skipped) {
            content.push(node);
        }
    }

    (Doc::new(content), skipped.into_iter().collect())
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

/// Convert one top-level or nested block node.
///
/// Returns `None` for block types with no ADF counterpart, after recording
/// the skip.
fn block_node<'a>(node: &'a AstNode<'a>, skipped: &mut BTreeSet<String>) -> Option<Node> {
    let data = node.data.borrow();

    match &data.value {
        NodeValue::Paragraph => Some(Node::Paragraph {
            content: inline_content(node),
        }),

        NodeValue::Heading(heading) => Some(Node::Heading {
            attrs: HeadingAttrs {
                level: heading.level,
            },
            content: inline_content(node),
        }),

        NodeValue::CodeBlock(code_block) => {
            let literal = code_block
                .literal
                .strip_suffix('\n')
                .unwrap_or(&code_block.literal);
            let attrs = if code_block.info.is_empty() {
                None
            } else {
                Some(CodeBlockAttrs {
                    language: code_block.info.clone(),
                })
            };
            let content = if literal.is_empty() {
                Vec::new()
            } else {
                vec![Node::text(literal)]
            };
            Some(Node::CodeBlock { attrs, content })
        }

        NodeValue::List(list) => {
            let items = node
                .children()
                .filter_map(|item| list_item(item, skipped))
                .collect();
            if matches!(list.list_type, ListType::Ordered) {
                Some(Node::OrderedList { content: items })
            } else {
                Some(Node::BulletList { content: items })
            }
        }

        NodeValue::BlockQuote => Some(Node::Blockquote {
            content: node
                .children()
                .filter_map(|child| block_node(child, skipped))
                .collect(),
        }),

        other => {
            skipped.insert(block_type_name(other).to_string());
            None
        }
    }
}

/// Convert a list item, preserving its nested block structure.
fn list_item<'a>(node: &'a AstNode<'a>, skipped: &mut BTreeSet<String>) -> Option<Node> {
    if !matches!(node.data.borrow().value, NodeValue::Item(_)) {
        return block_node(node, skipped);
    }
    Some(Node::ListItem {
        content: node
            .children()
            .filter_map(|child| block_node(child, skipped))
            .collect(),
    })
}

/// Convert the inline children of a block, then merge adjacent same-mark
/// text runs into the canonical consolidated form.
fn inline_content<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let mut out = Vec::new();
    for child in node.children() {
        collect_inline(child, &[], &mut out);
    }
    consolidate(out)
}

/// Recursively collect inline nodes, threading the active mark stack.
///
/// Each nesting level receives its own extended copy of the stack; marks
/// are never popped or mutated in place.
fn collect_inline<'a>(node: &'a AstNode<'a>, marks: &[Mark], out: &mut Vec<Node>) {
    let data = node.data.borrow();

    match &data.value {
        NodeValue::Text(text) => {
            out.push(Node::text_with_marks(text.clone(), marks.to_vec()));
        }

        NodeValue::Emph => {
            let marks = extended(marks, Mark::Em);
            for child in node.children() {
                collect_inline(child, &marks, out);
            }
        }

        NodeValue::Strong => {
            let marks = extended(marks, Mark::Strong);
            for child in node.children() {
                collect_inline(child, &marks, out);
            }
        }

        NodeValue::Code(code) => {
            // Code spans are leaves; the code mark is applied last.
            out.push(Node::text_with_marks(
                code.literal.clone(),
                extended(marks, Mark::Code),
            ));
        }

        NodeValue::Link(link) => {
            let marks = extended(
                marks,
                Mark::Link {
                    attrs: LinkAttrs {
                        href: link.url.clone(),
                    },
                },
            );
            for child in node.children() {
                collect_inline(child, &marks, out);
            }
        }

        // Single newlines are hard breaks in this grammar.
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(Node::HardBreak),

        // Other inline constructs pass their children through unchanged;
        // this is not counted as a skip.
        _ => {
            for child in node.children() {
                collect_inline(child, marks, out);
            }
        }
    }
}

/// Human-readable name of a block type the encoder cannot represent.
fn block_type_name(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::ThematicBreak => "horizontal rule",
        NodeValue::HtmlBlock(_) => "html block",
        NodeValue::Table(_) => "table",
        NodeValue::FootnoteDefinition(_) => "footnote definition",
        NodeValue::FrontMatter(_) => "front matter",
        _ => "unsupported block",
    }
}

//! Mark algebra shared by the encoder and decoder.
//!
//! Mark lists are ordered sets: two lists are equal when they contain the
//! same mark types with the same attributes, regardless of storage order.
//! The textual wrapping order on decode is fixed independently of storage
//! order, which is what makes round trips deterministic.

use super::nodes::{Mark, Node};

/// Order-insensitive structural equality of two mark lists.
pub fn marks_equal(a: &[Mark], b: &[Mark]) -> bool {
    a.len() == b.len()
        && a.iter().all(|mark| b.contains(mark))
        && b.iter().all(|mark| a.contains(mark))
}

/// A copy of `marks` with one more mark pushed on top.
///
/// The encoder threads mark stacks through recursion by value; nothing is
/// ever popped or mutated in place.
pub fn extended(marks: &[Mark], mark: Mark) -> Vec<Mark> {
    let mut out = marks.to_vec();
    out.push(mark);
    out
}

/// Merge adjacent text nodes whose mark lists are structurally equal.
///
/// Single left-to-right pass. This produces the smallest possible tree and
/// matches the canonical shape the server stores, so round-trip equality
/// tests can compare trees directly.
pub fn consolidate(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Node::Text { text, marks } = &node {
            if let Some(Node::Text {
                text: prev_text,
                marks: prev_marks,
            }) = out.last_mut()
            {
                let prev = prev_marks.as_deref().unwrap_or(&[]);
                let curr = marks.as_deref().unwrap_or(&[]);
                if marks_equal(prev, curr) {
                    prev_text.push_str(text);
                    continue;
                }
            }
        }
        out.push(node);
    }
    out
}

/// Wrap literal text in the markdown syntax for its marks.
///
/// Applied in a fixed nesting order regardless of storage order: `code`
/// innermost, then emphasis and strong (collapsing to a single triple
/// delimiter when both are present), and `link` outermost.
pub fn wrap(text: &str, marks: &[Mark]) -> String {
    let mut out = String::from(text);

    if marks.contains(&Mark::Code) {
        out = format!("`{out}`");
    }

    let strong = marks.contains(&Mark::Strong);
    let em = marks.contains(&Mark::Em);
    match (strong, em) {
        (true, true) => out = format!("***{out}***"),
        (true, false) => out = format!("**{out}**"),
        (false, true) => out = format!("*{out}*"),
        (false, false) => {}
    }

    let href = marks.iter().find_map(|mark| match mark {
        Mark::Link { attrs } => Some(attrs.href.as_str()),
        _ => None,
    });
    if let Some(href) = href {
        out = format!("[{out}]({href})");
    }

    out
}

//! Round-trip tests (Markdown → ADF → Markdown)
//!
//! For markdown built solely from the supported grammar, decoding the
//! encoded tree must reproduce the source string exactly.

use adf_babel::{decode, encode};

/// Assert that a markdown string survives an encode/decode round trip
/// without warnings.
fn assert_roundtrip(md: &str) {
    let (doc, warnings) = encode(md);
    assert!(
        warnings.is_empty(),
        "Unexpected warnings for {md:?}: {warnings:?}"
    );
    assert_eq!(decode(&doc), md, "Round trip changed {md:?}");
}

#[test]
fn test_plain_paragraph() {
    assert_roundtrip("Hello, world!");
}

#[test]
fn test_bold() {
    assert_roundtrip("This is **bold** text.");
}

#[test]
fn test_italic() {
    assert_roundtrip("This is *italic* text.");
}

#[test]
fn test_inline_code() {
    assert_roundtrip("Use `code` here.");
}

#[test]
fn test_fenced_code_block() {
    assert_roundtrip("```go\nfmt.Println(\"hi\")\n```");
}

#[test]
fn test_heading() {
    assert_roundtrip("## Heading");
}

#[test]
fn test_bullet_list() {
    assert_roundtrip("- a\n- b");
}

#[test]
fn test_ordered_list() {
    assert_roundtrip("1. a\n2. b");
}

#[test]
fn test_link() {
    assert_roundtrip("[Google](https://google.com)");
}

#[test]
fn test_blockquote() {
    assert_roundtrip("> quoted");
}

#[test]
fn test_bold_italic_triple_delimiter() {
    // The canonical combined form must come back as a single triple
    // delimiter, never as nested `**...*...*...**`.
    assert_roundtrip("***bold and italic***");
    assert_roundtrip("This is ***bold and italic*** text.");
}

#[test]
fn test_hard_line_break() {
    assert_roundtrip("line one\nline two");
}

#[test]
fn test_multiple_blocks() {
    assert_roundtrip("## Title\n\nA paragraph.\n\n- a\n- b\n\n> quoted");
}

#[test]
fn test_link_with_styled_text() {
    assert_roundtrip("[**bold link**](https://example.com)");
}

#[test]
fn test_roundtrip_through_json_wire_form() {
    let md = "A **styled** paragraph with `code`.";
    let (doc, _) = encode(md);
    let json = doc.to_json().expect("Should serialize");
    let parsed = adf_babel::Doc::from_json(&json).expect("Should parse back");
    assert_eq!(decode(&parsed), md);
}

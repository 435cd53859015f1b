//! Encode tests (Markdown → ADF)
//!
//! These verify the shape of the produced tree and the warning list by
//! checking against the literal wire-format JSON.

use adf_babel::encode;
use serde_json::json;

#[test]
fn test_empty_input_is_empty_doc_without_warnings() {
    let (doc, warnings) = encode("");
    assert!(warnings.is_empty());
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({"type": "doc", "version": 1, "content": []})
    );
}

#[test]
fn test_paragraph_wire_shape() {
    let (doc, _) = encode("Hello, world!");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "paragraph",
                "content": [{"type": "text", "text": "Hello, world!"}],
            }],
        })
    );
}

#[test]
fn test_heading_and_code_block_wire_shape() {
    let (doc, _) = encode("## Heading\n\n```go\nfmt.Println(\"hi\")\n```");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "version": 1,
            "content": [
                {
                    "type": "heading",
                    "attrs": {"level": 2},
                    "content": [{"type": "text", "text": "Heading"}],
                },
                {
                    "type": "codeBlock",
                    "attrs": {"language": "go"},
                    "content": [{"type": "text", "text": "fmt.Println(\"hi\")"}],
                },
            ],
        })
    );
}

#[test]
fn test_list_wire_shape() {
    let (doc, _) = encode("- a\n- b");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "bulletList",
                "content": [
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{"type": "text", "text": "a"}],
                        }],
                    },
                    {
                        "type": "listItem",
                        "content": [{
                            "type": "paragraph",
                            "content": [{"type": "text", "text": "b"}],
                        }],
                    },
                ],
            }],
        })
    );
}

#[test]
fn test_blockquote_wire_shape() {
    let (doc, _) = encode("> quoted");
    assert_eq!(
        serde_json::to_value(&doc).unwrap(),
        json!({
            "type": "doc",
            "version": 1,
            "content": [{
                "type": "blockquote",
                "content": [{
                    "type": "paragraph",
                    "content": [{"type": "text", "text": "quoted"}],
                }],
            }],
        })
    );
}

#[test]
fn test_stacked_marks_on_one_run() {
    let (doc, _) = encode("***both***");
    let value = serde_json::to_value(&doc).unwrap();
    let marks = &value["content"][0]["content"][0]["marks"];
    assert_eq!(marks.as_array().map(|m| m.len()), Some(2));
}

#[test]
fn test_skipped_blocks_warn_in_alphabetical_order() {
    let md = "kept paragraph\n\n---\n\n<div>raw block</div>\n";
    let (doc, warnings) = encode(md);

    assert_eq!(warnings, vec!["horizontal rule", "html block"]);
    // Encoding continues with the remaining content.
    assert_eq!(doc.content.len(), 1);
}

#[test]
fn test_duplicate_skips_produce_one_warning() {
    let md = "---\n\ntext\n\n---\n";
    let (_, warnings) = encode(md);
    assert_eq!(warnings, vec!["horizontal rule"]);
}

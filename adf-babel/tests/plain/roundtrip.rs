//! Round-trip tests for the plain-text boundary codec
//!
//! Within its narrow grammar (paragraphs split by blank lines, hard breaks
//! from single newlines) the codec must be exactly lossless, independent of
//! what the markdown-aware codec does with the same input.

use adf_babel::{decode_plain, encode_plain};
use proptest::prelude::*;

#[test]
fn test_roundtrip_paragraphs_and_breaks() {
    let text = "first paragraph\nstill first\n\nsecond paragraph";
    assert_eq!(decode_plain(&encode_plain(text)), text);
}

#[test]
fn test_independent_of_markdown_codec() {
    // The markdown codec would interpret this; the plain codec must not.
    let text = "# not a heading\n\n- not a list\n**not bold**";
    assert_eq!(decode_plain(&encode_plain(text)), text);
}

#[test]
fn test_repeated_blank_lines_collapse() {
    // Three or more newlines are still one paragraph break.
    assert_eq!(decode_plain(&encode_plain("a\n\n\n\nb")), "a\n\nb");
}

proptest! {
    /// Any normalized text (non-empty lines, paragraphs separated by
    /// exactly one blank line) survives the round trip byte-for-byte.
    #[test]
    fn test_roundtrip_normalized_text(
        paragraphs in prop::collection::vec(
            prop::collection::vec("[a-z][a-z ,.!?*#`-]{0,24}", 1..4),
            1..4,
        )
    ) {
        let text = paragraphs
            .iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        prop_assert_eq!(decode_plain(&encode_plain(&text)), text);
    }
}

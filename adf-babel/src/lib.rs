//! Bidirectional conversion between flavored Markdown and the Atlassian
//! Document Format (ADF)
//!
//!     Issue-tracking APIs accept and return rich-text fields as a JSON
//!     document tree; people write Markdown. This crate is the contract
//!     boundary between the two: it encodes Markdown into the tree the API
//!     accepts and decodes API trees back into Markdown, keeping round
//!     trips lossless for the supported vocabulary.
//!
//!     This is a pure lib: no I/O, no shell assumptions, no state between
//!     calls. Every call takes an input tree or string and returns a fresh
//!     output plus, for encoding, a warning list. That makes every
//!     operation thread-safe by construction.
//!
//! Architecture
//!
//!     The document tree model lives in ./adf (node vocabulary, marks, and
//!     the mark algebra). The two codecs sit on top of it:
//!
//!     - ./markdown: the markdown-aware pair. The encoder parses with
//!       comrak and walks the AST, threading an accumulating mark stack
//!       through inline recursion; the decoder re-serializes blocks with a
//!       fixed mark-wrapping order. See the mapping table in
//!       ./markdown/mod.rs.
//!     - ./plain.rs: the boundary codec for text that must not be
//!       interpreted as markdown (paragraphs and hard breaks only).
//!
//!     ./detect.rs decides whether a raw string is already a serialized
//!     tree, so upstream callers never convert twice.
//!
//! Error Policy
//!
//!     Conversion never fails. Unsupported markdown blocks are skipped and
//!     named in the returned warning list; malformed externally sourced
//!     trees decode with documented defaults. The only fallible surface is
//!     the JSON string boundary ([`Doc::from_json`] / [`Doc::to_json`]).

pub mod adf;
pub mod detect;
pub mod error;
pub mod markdown;
pub mod plain;

pub use adf::{Doc, Mark, Node};
pub use error::FormatError;
pub use plain::{decode_plain, encode_plain};

/// Encode a markdown string as a document tree plus warnings.
///
/// See [`markdown::encoder::encode`].
pub fn encode(markdown: &str) -> (Doc, Vec<String>) {
    markdown::encoder::encode(markdown)
}

/// Decode a document tree to a markdown string.
///
/// See [`markdown::decoder::decode`].
pub fn decode(doc: &Doc) -> String {
    markdown::decoder::decode(doc)
}

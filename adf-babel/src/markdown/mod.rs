//! Markdown codec (GitHub-flavored Markdown ↔ ADF)
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing. The encoder never
//! tokenizes text itself; it walks the comrak AST and transforms it into
//! the ADF tree. The decoder renders markdown directly, since the ADF
//! vocabulary maps one-to-one onto markdown syntax and the wrapping order
//! of marks must be byte-stable for round trips.
//!
//! # Element Mapping Table
//!
//! | ADF Node        | Markdown Equivalent  | Notes                                      |
//! |-----------------|----------------------|--------------------------------------------|
//! | paragraph       | Paragraph            | Direct mapping                             |
//! | heading         | `#`..`######`        | `attrs.level` 1-6, read tolerantly         |
//! | codeBlock       | Fenced code block    | `attrs.language` ↔ info string             |
//! | bulletList      | `- item`             | Items keep nested block structure          |
//! | orderedList     | `1. item`            | Rendered with 1-based positions            |
//! | listItem        | List item            | Child blocks, space-joined on render       |
//! | blockquote      | `> quoted`           | Every rendered line prefixed               |
//! | text            | Plain text           | Marks wrapped in fixed order               |
//! | hardBreak       | Single newline       | Not a blank line                           |
//! | mark: strong    | `**bold**`           |                                            |
//! | mark: em        | `*italic*`           | strong+em collapse to `***both***`         |
//! | mark: code      | `` `code` ``         | Innermost wrap                             |
//! | mark: link      | `[text](href)`       | Outermost wrap                             |
//!
//! # Lossy Conversions
//!
//! Markdown blocks outside this vocabulary (thematic breaks, raw HTML,
//! tables, ...) are skipped on encode and reported in the warning list.
//! Unknown inline constructs are unwrapped into their children without a
//! warning. Decoding tolerates unknown node types by falling back to
//! inline rendering of their content.

pub mod decoder;
pub mod encoder;

pub use decoder::decode;
pub use encoder::encode;

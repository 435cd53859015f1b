//! The Atlassian Document Format (ADF) tree model
//!
//! This module owns the data model shared by every codec in the crate: the
//! document root, the closed node vocabulary, the inline marks, and the
//! mark algebra (equality, stacking, consolidation, wrapping order).

pub mod marks;
pub mod nodes;

pub use nodes::{CodeBlockAttrs, Doc, HeadingAttrs, LinkAttrs, Mark, Node};

//! Markdown codec tests
//!
//! Tests for bidirectional Markdown ↔ ADF conversion.

mod encode;
mod roundtrip;

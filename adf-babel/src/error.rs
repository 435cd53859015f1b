//! Error types for the JSON string boundary
//!
//! The converters themselves never fail; errors only arise when turning a
//! raw JSON string into a document tree or back.

use std::fmt;

/// Errors that can occur at the serialized-document boundary
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Error while parsing a serialized document
    ParseError(String),
    /// Error while serializing a document
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

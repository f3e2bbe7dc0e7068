//! Error types for export operations

use std::fmt;

/// Errors that can occur during export operations
#[derive(Debug, Clone, PartialEq)]
pub enum ExportError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error while parsing the input HTML fragment
    ParseError(String),
    /// Error while producing the target encoding
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            ExportError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ExportError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            ExportError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}

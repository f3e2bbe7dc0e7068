//! Export format trait definition
//!
//! This module defines the core ExportFormat trait that all export targets
//! implement. The trait provides a uniform interface for turning an HTML
//! fragment into a downloadable byte buffer.

use crate::error::ExportError;
use std::collections::HashMap;

/// Output produced by an [`ExportFormat`] implementation.
#[derive(Debug)]
pub enum ExportedDocument {
    /// UTF-8 text output (e.g., plain text, HTML)
    Text(String),
    /// Binary output (e.g., DOCX, PDF)
    Binary(Vec<u8>),
}

impl ExportedDocument {
    /// Consume the exported output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ExportedDocument::Text(text) => text.into_bytes(),
            ExportedDocument::Binary(bytes) => bytes,
        }
    }
}

/// Trait for export targets
///
/// Implementors turn one rich-text HTML fragment into one output encoding.
/// Every call is a single stateless pass: the implementation parses its own
/// input and produces its own output buffer, so concurrent callers share
/// nothing.
///
/// # Examples
///
/// ```ignore
/// struct MyTarget;
///
/// impl ExportFormat for MyTarget {
///     fn name(&self) -> &str {
///         "my-target"
///     }
///
///     fn media_type(&self) -> &str {
///         "application/octet-stream"
///     }
///
///     fn export(&self, html: &str) -> Result<ExportedDocument, ExportError> {
///         // Convert the fragment to the target encoding
///         todo!()
///     }
/// }
/// ```
pub trait ExportFormat: Send + Sync {
    /// The name of this target (e.g., "text", "docx", "pdf")
    fn name(&self) -> &str;

    /// Optional description of this target
    fn description(&self) -> &str {
        ""
    }

    /// The media type of the produced output (e.g., "application/pdf")
    fn media_type(&self) -> &str;

    /// File extensions associated with this target (e.g., ["docx"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic target detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Export an HTML fragment to this target's encoding
    fn export(&self, html: &str) -> Result<ExportedDocument, ExportError>;

    /// Export an HTML fragment, optionally using extra parameters.
    ///
    /// Targets without extra parameters can rely on the default
    /// implementation, which delegates to [`ExportFormat::export`].
    fn export_with_options(
        &self,
        html: &str,
        options: &HashMap<String, String>,
    ) -> Result<ExportedDocument, ExportError> {
        if options.is_empty() {
            self.export(html)
        } else {
            Err(ExportError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

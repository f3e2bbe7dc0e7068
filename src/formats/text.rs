//! Plain-text export
//!
//! Strips all markup and keeps the fragment's text content only.
//! Alignment and character styles are discarded, and no paragraph
//! breaks are reconstructed beyond what the text nodes themselves
//! carry, so the output matches the fragment's fully-stripped text
//! exactly: text outside any block element is kept too.

use crate::error::ExportError;
use crate::format::{ExportFormat, ExportedDocument};
use crate::formats::html;

/// Export target producing `text/plain` output.
#[derive(Default)]
pub struct TextFormat;

impl ExportFormat for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with all markup stripped"
    }

    fn media_type(&self) -> &str {
        "text/plain"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn export(&self, fragment: &str) -> Result<ExportedDocument, ExportError> {
        html::extract_text(fragment).map(ExportedDocument::Text)
    }
}

//! DOCX format implementation
//!
//! Converts the editor's HTML fragment to a Word document: one native
//! paragraph per model paragraph, alignment mapped to WordprocessingML
//! justification, one native run per model run with bold/italic/
//! underline flags.

mod serializer;

pub use serializer::write_docx;

use crate::error::ExportError;
use crate::format::{ExportFormat, ExportedDocument};
use crate::formats::html;

/// Export target producing a DOCX package.
#[derive(Default)]
pub struct DocxFormat;

impl ExportFormat for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Word document with paragraph alignment and character styles"
    }

    fn media_type(&self) -> &str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn export(&self, fragment: &str) -> Result<ExportedDocument, ExportError> {
        let doc = html::parse_fragment(fragment)?;
        write_docx(&doc).map(ExportedDocument::Binary)
    }
}

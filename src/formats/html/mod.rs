//! HTML format implementation
//!
//! HTML is both the input side of this crate (the rich-text editor hands
//! us a fragment) and an export target (a standalone page, which also
//! feeds the PDF renderer).
//!
//! # Library Choice
//!
//! We use the `html5ever` + `rcdom` ecosystem for HTML parsing and
//! serialization:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! The editor's output is never schema-validated, so a parser that
//! handles malformed HTML gracefully matters more than strictness here.
//!
//! # Element Mapping Table
//!
//! | HTML                          | Model                       | Notes                                   |
//! |-------------------------------|-----------------------------|-----------------------------------------|
//! | `<p>`, `<div>` (outermost)    | Paragraph                   | document order; nested blocks not split |
//! | `style="text-align: center"`  | Alignment::Center           | first `text-align` declaration wins     |
//! | `style="text-align: right"`   | Alignment::End              |                                         |
//! | `style="text-align: justify"` | Alignment::Justify          |                                         |
//! | text node                     | Run (inherited style)       |                                         |
//! | `<strong>`, `<b>`             | bold added to style set     | styles compose on nesting               |
//! | `<em>`, `<i>`                 | italic added to style set   |                                         |
//! | `<u>`                         | underline added to style set|                                         |
//! | any other inline tag          | content passes through      | no silent drops                         |
//!
//! A fragment with no block element at all collapses to one unstyled
//! paragraph holding the full extracted text.

mod parser;
mod serializer;

pub use parser::{extract_text, parse_fragment};
pub use serializer::{serialize_document, HtmlOptions};

use crate::error::ExportError;
use crate::format::{ExportFormat, ExportedDocument};

/// Export target producing a standalone HTML page.
#[derive(Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Render an HTML fragment as a standalone page via the document model.
    pub fn render_page(&self, html: &str) -> Result<String, ExportError> {
        let doc = parse_fragment(html)?;
        serialize_document(&doc, &self.options)
    }
}

impl ExportFormat for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Standalone HTML5 page with embedded CSS"
    }

    fn media_type(&self) -> &str {
        "text/html"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn export(&self, html: &str) -> Result<ExportedDocument, ExportError> {
        self.render_page(html).map(ExportedDocument::Text)
    }
}

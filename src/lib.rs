//! Export library for rich-text editor HTML
//!
//!     A browser-based editor (Quill and friends) hands the application an
//!     HTML fragment; this crate turns that fragment into the downloadable
//!     encodings a word-processor UI offers: plain text, DOCX, a standalone
//!     HTML page, and PDF.
//!
//! Architecture
//!
//!     Conversion funnels through a small intermediate model (./ir/mod.rs):
//!     paragraphs carrying an alignment, each an ordered list of styled text
//!     runs. The HTML parser builds the model, the encoders consume it. The
//!     model is rebuilt from scratch on every export and discarded after:
//!     there is no shared state between calls, so concurrent exports need no
//!     coordination.
//!
//!     This is a pure lib: it is meant to sit under a UI shell but is shell
//!     agnostic, that is no std print, no env-driven behavior (the renderer binary
//!     override being the one deliberate exception).
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # ExportFormat trait definition
//!     ├── registry.rs             # ExportRegistry for discovery and selection
//!     ├── formats
//!     │   ├── html                # fragment → model parser, model → page serializer
//!     │   ├── text                # plain-text target
//!     │   ├── docx                # WordprocessingML target
//!     │   └── pdf                 # headless-Chrome target (feature native-export)
//!     ├── ir                      # Paragraph/Run model
//!     └── lib.rs
//!
//! Library Choices
//!
//!     As much as possible the heavy lifting is offloaded to specialized
//!     crates: html5ever/rcdom for everything HTML (the editor's output is
//!     real-world markup, so a browser-grade parser is non-negotiable), the
//!     zip crate for the DOCX package. PDF is the one place we shell out, as
//!     an HTML-to-PDF engine is a browser, and embedding one is not worth
//!     it for a conversion library.

pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;

pub use error::ExportError;
pub use format::{ExportFormat, ExportedDocument};
pub use registry::ExportRegistry;

/// Converts an HTML fragment to the intermediate document model.
///
/// # Information Loss
///
/// The model is a simplified, paragraph-level representation. The
/// following input information is lost during conversion:
/// - Block tags other than `p`/`div` (their text survives, unstyled)
/// - Inline styling other than bold/italic/underline
/// - Text outside any block element, when block elements exist
///
/// The plain-text target does not go through the model and keeps all
/// text content.
pub fn to_document(html: &str) -> Result<ir::nodes::Document, ExportError> {
    formats::html::parse_fragment(html)
}

/// Export an HTML fragment using one of the built-in targets.
///
/// Convenience wrapper over [`ExportRegistry::with_defaults`]; callers
/// exporting repeatedly should hold their own registry.
pub fn export(html: &str, format: &str) -> Result<ExportedDocument, ExportError> {
    ExportRegistry::with_defaults().export(html, format)
}

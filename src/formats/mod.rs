//! Export format implementations
//!
//! This module contains all export targets that turn the editor's HTML
//! fragment into an output encoding.

pub mod docx;
pub mod html;
#[cfg(feature = "native-export")]
pub mod pdf;
pub mod text;

pub use docx::DocxFormat;
pub use html::{HtmlFormat, HtmlOptions};
#[cfg(feature = "native-export")]
pub use pdf::PdfFormat;
pub use text::TextFormat;

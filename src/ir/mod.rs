//! Intermediate representation of an exported document.
//!
//! This module defines the format-agnostic Paragraph/Run model that the
//! HTML converter produces and the text, DOCX and PDF encoders consume.

pub mod nodes;

pub use nodes::{Alignment, Document, Paragraph, Run, StyleSet};

//! Export registry for target discovery and selection
//!
//! This module provides a centralized registry for all available export
//! targets. Targets can be registered and retrieved by name.

use crate::error::ExportError;
use crate::format::{ExportFormat, ExportedDocument};
use std::collections::HashMap;

/// Registry of export targets
///
/// # Examples
///
/// ```ignore
/// let mut registry = ExportRegistry::new();
/// registry.register(MyTarget);
///
/// let format = registry.get("my-target")?;
/// let output = format.export("<p>Hello</p>")?;
/// ```
pub struct ExportRegistry {
    formats: HashMap<String, Box<dyn ExportFormat>>,
}

impl ExportRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ExportRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register an export target
    ///
    /// If a target with the same name already exists, it will be replaced.
    pub fn register<F: ExportFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a target by name
    pub fn get(&self, name: &str) -> Result<&dyn ExportFormat, ExportError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ExportError::FormatNotFound(name.to_string()))
    }

    /// Check if a target exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available target names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect a target from a filename based on its extension
    ///
    /// Returns the target name if a matching extension is found, or None
    /// otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for format in self.formats.values() {
            if format.file_extensions().contains(&extension) {
                return Some(format.name().to_string());
            }
        }

        None
    }

    /// Export an HTML fragment using the named target
    pub fn export(&self, html: &str, format: &str) -> Result<ExportedDocument, ExportError> {
        self.get(format)?.export(html)
    }

    /// Export an HTML fragment using the named target and options
    pub fn export_with_options(
        &self,
        html: &str,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<ExportedDocument, ExportError> {
        self.get(format)?.export_with_options(html, options)
    }

    /// Create a registry with the built-in targets
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::text::TextFormat);
        registry.register(crate::formats::html::HtmlFormat::default());
        registry.register(crate::formats::docx::DocxFormat);
        #[cfg(feature = "native-export")]
        registry.register(crate::formats::pdf::PdfFormat::default());

        registry
    }
}

impl Default for ExportRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

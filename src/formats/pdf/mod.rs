//! PDF export built on top of the HTML serializer + headless Chrome.
//!
//! The fragment is converted to the document model, rendered to a
//! standalone HTML page, page-size CSS is injected, and a Chrome/
//! Chromium binary in headless mode prints the page to PDF. Going
//! through the model keeps the PDF output consistent with the DOCX
//! encoding rather than rendering the raw editor markup.

use crate::error::ExportError;
use crate::format::{ExportFormat, ExportedDocument};
use crate::formats::html::HtmlFormat;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;
use url::Url;
use which::which;

/// Export target that shells out to Chrome/Chromium to generate PDFs.
#[derive(Default)]
pub struct PdfFormat {
    html: HtmlFormat,
}

impl PdfFormat {
    pub fn new() -> Self {
        Self {
            html: HtmlFormat::default(),
        }
    }
}

impl ExportFormat for PdfFormat {
    fn name(&self) -> &str {
        "pdf"
    }

    fn description(&self) -> &str {
        "HTML-based PDF export via headless Chrome"
    }

    fn media_type(&self) -> &str {
        "application/pdf"
    }

    fn file_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn export(&self, fragment: &str) -> Result<ExportedDocument, ExportError> {
        self.export_with_options(fragment, &HashMap::new())
    }

    fn export_with_options(
        &self,
        fragment: &str,
        options: &HashMap<String, String>,
    ) -> Result<ExportedDocument, ExportError> {
        let profile = PdfPageProfile::from_options(options)?;
        let page = self.html.render_page(fragment)?;
        let final_html = inject_page_css(&page, profile.print_css());
        let pdf_bytes = render_html_to_pdf(&final_html)?;
        Ok(ExportedDocument::Binary(pdf_bytes))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PdfPageProfile {
    A4,
    Letter,
}

impl PdfPageProfile {
    fn from_options(options: &HashMap<String, String>) -> Result<Self, ExportError> {
        match options.get("page-size").map(String::as_str) {
            None | Some("a4") => Ok(PdfPageProfile::A4),
            Some("letter") => Ok(PdfPageProfile::Letter),
            Some(other) => Err(ExportError::SerializationError(format!(
                "Invalid page size '{other}' (expected 'a4' or 'letter')"
            ))),
        }
    }

    fn print_css(&self) -> &'static str {
        match self {
            PdfPageProfile::A4 => "@page { size: 210mm 297mm; margin: 18mm; }\nbody { margin: 0; }\n",
            PdfPageProfile::Letter => {
                "@page { size: 8.5in 11in; margin: 0.75in; }\nbody { margin: 0; }\n"
            }
        }
    }
}

fn inject_page_css(html: &str, css: &str) -> String {
    let style_tag = format!("<style data-export-pdf>\n{css}\n</style>");
    if let Some(idx) = html.find("</head>") {
        let mut output = String::with_capacity(html.len() + style_tag.len());
        output.push_str(&html[..idx]);
        output.push_str(&style_tag);
        output.push_str(&html[idx..]);
        output
    } else {
        format!("{style_tag}{html}")
    }
}

fn render_html_to_pdf(html: &str) -> Result<Vec<u8>, ExportError> {
    let chrome = resolve_chrome_binary()?;
    let temp_dir =
        tempdir().map_err(|e| ExportError::SerializationError(format!("Temp dir error: {e}")))?;
    let html_path = temp_dir.path().join("export.html");
    let mut html_file = fs::File::create(&html_path)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;
    html_file
        .write_all(html.as_bytes())
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let pdf_path = temp_dir.path().join("export.pdf");
    let file_url = Url::from_file_path(&html_path).map_err(|_| {
        ExportError::SerializationError("Failed to construct file:// URL for HTML input".to_string())
    })?;

    let pdf_arg = format!("--print-to-pdf={}", pdf_path.display());

    let status = Command::new(&chrome)
        .arg("--headless")
        .arg("--disable-gpu")
        .arg("--no-sandbox")
        .arg("--disable-dev-shm-usage")
        .arg("--print-to-pdf-no-header")
        .arg(pdf_arg)
        .arg(file_url.as_str())
        .status()
        .map_err(|e| {
            ExportError::SerializationError(format!(
                "Failed to launch Chrome ({}): {}",
                chrome.display(),
                e
            ))
        })?;

    if !status.success() {
        return Err(ExportError::SerializationError(format!(
            "Chrome exited with status {status}"
        )));
    }

    fs::read(&pdf_path).map_err(|e| ExportError::SerializationError(e.to_string()))
}

fn resolve_chrome_binary() -> Result<PathBuf, ExportError> {
    for var in ["QUILL_CHROME_BIN", "GOOGLE_CHROME_BIN", "CHROME_BIN"] {
        if let Some(path) = env::var_os(var) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
    }

    for candidate in [
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
        "msedge",
    ] {
        if let Ok(path) = which(candidate) {
            return Ok(path);
        }
    }

    #[cfg(target_os = "macos")]
    {
        let default_path = "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome";
        let candidate = PathBuf::from(default_path);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    #[cfg(target_os = "windows")]
    {
        let candidates = [
            r"C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",
            r"C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
        ];
        for candidate in candidates {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        let candidates = [
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium-browser",
            "/usr/bin/chromium",
        ];
        for candidate in candidates {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    Err(ExportError::SerializationError(
        "Unable to locate a Chrome/Chromium binary. Set QUILL_CHROME_BIN to override the detection."
            .to_string(),
    ))
}

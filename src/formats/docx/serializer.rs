//! DOCX serialization (document model → WordprocessingML package)
//!
//! A DOCX file is an OPC zip archive. We emit the minimal part set
//! (content types, package relationships, `word/document.xml` and a
//! default style) and build the WordprocessingML by hand: the model
//! only carries paragraphs, alignment and three run flags, which does
//! not warrant a full OOXML library.

use crate::error::ExportError;
use crate::ir::nodes::{Alignment, Document, Paragraph, Run};
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Serialize a document to an in-memory DOCX archive.
pub fn write_docx(doc: &Document) -> Result<Vec<u8>, ExportError> {
    let document_xml = build_document_xml(doc);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed timestamp: repeated exports of the same input must be
    // byte-identical.
    let opt = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", RELS_XML),
        ("word/document.xml", &document_xml),
        ("word/_rels/document.xml.rels", WORD_RELS_XML),
        ("word/styles.xml", STYLES_XML),
    ];
    for (name, content) in parts {
        zip.start_file(name, opt).map_err(package_error)?;
        zip.write_all(content.as_bytes())
            .map_err(|e| ExportError::SerializationError(format!("DOCX packaging failed: {e}")))?;
    }

    let cursor = zip.finish().map_err(package_error)?;
    Ok(cursor.into_inner())
}

fn package_error(e: zip::result::ZipError) -> ExportError {
    ExportError::SerializationError(format!("DOCX packaging failed: {e}"))
}

/// Build the main document part.
fn build_document_xml(doc: &Document) -> String {
    let mut body = String::new();
    for paragraph in &doc.paragraphs {
        body.push_str(&paragraph_xml(paragraph));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    {body}
    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/>
    </w:sectPr>
  </w:body>
</w:document>"#
    )
}

fn paragraph_xml(paragraph: &Paragraph) -> String {
    let mut xml = String::from("<w:p>");
    if let Some(jc) = jc_value(paragraph.alignment) {
        xml.push_str("<w:pPr><w:jc w:val=\"");
        xml.push_str(jc);
        xml.push_str("\"/></w:pPr>");
    }
    for run in &paragraph.runs {
        if !run.text.is_empty() {
            xml.push_str(&run_xml(run));
        }
    }
    xml.push_str("</w:p>");
    xml
}

/// WordprocessingML justification value; the default start alignment
/// emits no paragraph properties at all.
fn jc_value(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Start => None,
        Alignment::Center => Some("center"),
        Alignment::End => Some("right"),
        Alignment::Justify => Some("both"),
    }
}

fn run_xml(run: &Run) -> String {
    let mut props = String::new();
    if run.style.bold {
        props.push_str("<w:b/>");
    }
    if run.style.italic {
        props.push_str("<w:i/>");
    }
    if run.style.underline {
        props.push_str("<w:u w:val=\"single\"/>");
    }

    let mut xml = String::from("<w:r>");
    if !props.is_empty() {
        xml.push_str("<w:rPr>");
        xml.push_str(&props);
        xml.push_str("</w:rPr>");
    }
    xml.push_str("<w:t xml:space=\"preserve\">");
    xml.push_str(&xml_escape_text(&run.text));
    xml.push_str("</w:t></w:r>");
    xml
}

fn xml_escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const WORD_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
</w:styles>"#;

//! Export tests for the DOCX target (fragment → Word package)
//!
//! These unzip the produced archive and assert on the actual
//! WordprocessingML, so they catch both packaging and mapping
//! regressions.

use quill_export::format::{ExportFormat, ExportedDocument};
use quill_export::formats::docx::DocxFormat;
use std::io::{Cursor, Read};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

fn export_docx(fragment: &str) -> Vec<u8> {
    match DocxFormat.export(fragment).unwrap() {
        ExportedDocument::Binary(bytes) => bytes,
        ExportedDocument::Text(_) => panic!("Expected binary output"),
    }
}

fn document_xml(bytes: &[u8]) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_archive_is_a_zip_package() {
    let bytes = export_docx("<p>Hello</p>");
    assert!(bytes.starts_with(b"PK\x03\x04"));

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert!(archive.by_name("[Content_Types].xml").is_ok());
    assert!(archive.by_name("word/document.xml").is_ok());
}

#[test]
fn test_paragraph_count_matches_source() {
    let bytes = export_docx("<p>one</p><p>two</p><div>three</div>");
    let xml = document_xml(&bytes);
    let tree = roxmltree::Document::parse(&xml).unwrap();

    let paragraphs: Vec<_> = tree
        .descendants()
        .filter(|n| n.has_tag_name((W_NS, "p")))
        .collect();
    assert_eq!(paragraphs.len(), 3);

    let texts: Vec<&str> = tree
        .descendants()
        .filter(|n| n.has_tag_name((W_NS, "t")))
        .map(|n| n.text().unwrap_or(""))
        .collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[test]
fn test_alignment_maps_to_justification() {
    let fragment = concat!(
        "<p>start</p>",
        r#"<p style="text-align: center">center</p>"#,
        r#"<p style="text-align: right">right</p>"#,
        r#"<p style="text-align: justify">justify</p>"#,
    );
    let xml = document_xml(&export_docx(fragment));
    let tree = roxmltree::Document::parse(&xml).unwrap();

    let jc_values: Vec<Option<&str>> = tree
        .descendants()
        .filter(|n| n.has_tag_name((W_NS, "p")))
        .map(|p| {
            p.descendants()
                .find(|n| n.has_tag_name((W_NS, "jc")))
                .and_then(|jc| jc.attribute((W_NS, "val")))
        })
        .collect();
    assert_eq!(
        jc_values,
        vec![None, Some("center"), Some("right"), Some("both")]
    );
}

#[test]
fn test_run_styling_flags() {
    let xml = document_xml(&export_docx(
        "<p><strong>b</strong><em>i</em><u>u</u> plain</p>",
    ));
    let tree = roxmltree::Document::parse(&xml).unwrap();

    let runs: Vec<_> = tree
        .descendants()
        .filter(|n| n.has_tag_name((W_NS, "r")))
        .collect();
    assert_eq!(runs.len(), 4);

    let has = |idx: usize, tag: &str| {
        runs[idx]
            .descendants()
            .any(|n| n.has_tag_name((W_NS, tag)))
    };
    assert!(has(0, "b") && !has(0, "i") && !has(0, "u"));
    assert!(has(1, "i"));
    assert!(has(2, "u"));
    assert!(!has(3, "b") && !has(3, "i") && !has(3, "u"));
}

#[test]
fn test_composed_styles_reach_the_run() {
    let xml = document_xml(&export_docx("<p><strong><em>both</em></strong></p>"));
    let tree = roxmltree::Document::parse(&xml).unwrap();

    let run = tree
        .descendants()
        .find(|n| n.has_tag_name((W_NS, "r")))
        .unwrap();
    assert!(run.descendants().any(|n| n.has_tag_name((W_NS, "b"))));
    assert!(run.descendants().any(|n| n.has_tag_name((W_NS, "i"))));
}

#[test]
fn test_fragment_without_blocks_falls_back_to_one_paragraph() {
    let xml = document_xml(&export_docx("just loose text"));
    let tree = roxmltree::Document::parse(&xml).unwrap();

    let paragraphs: Vec<_> = tree
        .descendants()
        .filter(|n| n.has_tag_name((W_NS, "p")))
        .collect();
    assert_eq!(paragraphs.len(), 1);
    let text = paragraphs[0]
        .descendants()
        .find(|n| n.has_tag_name((W_NS, "t")))
        .and_then(|n| n.text())
        .unwrap();
    assert_eq!(text, "just loose text");
}

#[test]
fn test_export_is_byte_identical_across_calls() {
    let fragment = r#"<p style="text-align: center"><strong>same</strong> input</p>"#;
    assert_eq!(export_docx(fragment), export_docx(fragment));
}

//! Conversion tests for the HTML side (fragment → model → page)
//!
//! These exercise the converter contract end to end: block selection,
//! alignment mapping, run styling, the no-block fallback, and the
//! standalone page serializer.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use quill_export::format::{ExportFormat, ExportedDocument};
use quill_export::formats::html::{extract_text, HtmlFormat};
use quill_export::ir::nodes::{Alignment, Run, StyleSet};
use quill_export::to_document;
use regex::Regex;

static PARAGRAPH_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p\b[^>]*>").unwrap());

fn render_page(fragment: &str) -> String {
    match HtmlFormat::default().export(fragment).unwrap() {
        ExportedDocument::Text(html) => html,
        ExportedDocument::Binary(_) => panic!("Expected text output"),
    }
}

// ============================================================================
// FRAGMENT → MODEL
// ============================================================================

#[test]
fn test_plain_text_fragment_single_unstyled_run() {
    let doc = to_document("no markup at all").unwrap();
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.paragraphs[0].alignment, Alignment::Start);
    assert_eq!(doc.paragraphs[0].runs, vec![Run::plain("no markup at all")]);
}

#[test]
fn test_centered_hello() {
    let doc = to_document(r#"<p style="text-align: center">Hello</p>"#).unwrap();
    assert_eq!(doc.paragraphs.len(), 1);
    assert_eq!(doc.paragraphs[0].alignment, Alignment::Center);
    assert_eq!(doc.paragraphs[0].runs, vec![Run::plain("Hello")]);
}

#[test]
fn test_bold_then_plain_runs_in_order() {
    let doc = to_document("<p><strong>Bold</strong> normal</p>").unwrap();
    assert_eq!(
        doc.paragraphs[0].runs,
        vec![
            Run::styled("Bold", StyleSet::none().with_bold()),
            Run::plain(" normal"),
        ]
    );
}

#[test]
fn test_editor_style_multi_paragraph_fragment() {
    // What a Quill-style editor actually emits for three aligned lines.
    let fragment = concat!(
        "<p>left line</p>",
        r#"<p style="text-align: center"><em>middle</em> line</p>"#,
        r#"<p style="text-align: right"><u>last</u></p>"#,
    );
    let doc = to_document(fragment).unwrap();

    let alignments: Vec<Alignment> = doc.paragraphs.iter().map(|p| p.alignment).collect();
    assert_eq!(
        alignments,
        vec![Alignment::Start, Alignment::Center, Alignment::End]
    );
    assert_eq!(doc.paragraphs[1].text(), "middle line");
    assert_eq!(
        doc.paragraphs[2].runs,
        vec![Run::styled("last", StyleSet::none().with_underline())]
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let fragment = r#"<p style="text-align: justify"><strong>a</strong>b</p><div>c</div>"#;
    assert_eq!(to_document(fragment).unwrap(), to_document(fragment).unwrap());
}

// ============================================================================
// MODEL → STANDALONE PAGE
// ============================================================================

#[test]
fn test_page_roundtrips_alignment_and_styles() {
    let page = render_page(
        r#"<p style="text-align: center"><strong>Bold</strong> normal</p><p>plain</p>"#,
    );

    assert!(page.contains("<!DOCTYPE html>"));
    assert!(page.contains(r#"<p style="text-align: center">"#));
    assert!(page.contains("<strong>Bold</strong> normal"));
    assert_eq!(PARAGRAPH_TAG.find_iter(&page).count(), 2);
}

#[test]
fn test_page_embeds_baseline_css() {
    let page = render_page("<p>x</p>");
    assert!(page.contains("<style>"));
    assert!(page.contains(".export-document"));
}

#[test]
fn test_page_survives_reparsing() {
    // The serialized page, fed back through the converter, yields the
    // same model (the page's <p> elements are its outermost blocks).
    let fragment = r#"<p style="text-align: right">one</p><p><em>two</em></p>"#;
    let original = to_document(fragment).unwrap();
    let reparsed = to_document(&render_page(fragment)).unwrap();
    assert_eq!(original, reparsed);
}

// ============================================================================
// PLAIN TEXT EXTRACTION
// ============================================================================

#[test]
fn test_extract_text_snapshot() {
    let text = extract_text("<p><strong>Hello</strong> <em>world</em></p>").unwrap();
    insta::assert_snapshot!(text, @"Hello world");
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn alignment_strategy() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Start),
        Just(Alignment::Center),
        Just(Alignment::End),
        Just(Alignment::Justify),
    ]
}

fn style_value(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Start => None,
        Alignment::Center => Some("center"),
        Alignment::End => Some("right"),
        Alignment::Justify => Some("justify"),
    }
}

fn fragment_from(paragraphs: &[(Alignment, String)]) -> String {
    let mut html = String::new();
    for (alignment, text) in paragraphs {
        match style_value(*alignment) {
            Some(value) => html.push_str(&format!(r#"<p style="text-align: {value}">{text}</p>"#)),
            None => html.push_str(&format!("<p>{text}</p>")),
        }
    }
    html
}

proptest! {
    #[test]
    fn converted_fragments_preserve_alignment_and_text(
        paragraphs in proptest::collection::vec(
            (alignment_strategy(), "[a-zA-Z0-9][a-zA-Z0-9 ]{0,18}"),
            1..6,
        )
    ) {
        let html = fragment_from(&paragraphs);
        let doc = to_document(&html).unwrap();

        prop_assert_eq!(doc.paragraphs.len(), paragraphs.len());
        for (para, (alignment, text)) in doc.paragraphs.iter().zip(&paragraphs) {
            prop_assert_eq!(para.alignment, *alignment);
            prop_assert_eq!(para.text(), text.clone());
            prop_assert!(para.runs.iter().all(|r| r.style.is_plain()));
        }

        // Model text and raw extraction agree when all text lives in blocks.
        prop_assert_eq!(doc.text(), extract_text(&html).unwrap());
    }
}

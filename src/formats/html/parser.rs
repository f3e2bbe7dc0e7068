//! HTML parsing (editor fragment → document model)
//!
//! Converts the rich-text editor's HTML fragment to the Paragraph/Run
//! model. Pipeline: HTML string → RcDom → block selection → runs.

use crate::error::ExportError;
use crate::ir::nodes::{Alignment, Document, Paragraph, Run, StyleSet};
use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML fragment into the document model.
///
/// Outermost `p`/`div` elements become paragraphs, in document order.
/// When the fragment contains no block element at all, the whole
/// extracted text collapses into a single unstyled paragraph.
pub fn parse_fragment(html: &str) -> Result<Document, ExportError> {
    let dom = parse_dom(html)?;

    let mut blocks = Vec::new();
    collect_blocks(&dom.document, &mut blocks);

    if blocks.is_empty() {
        let mut text = String::new();
        collect_text(&dom.document, &mut text);
        let mut para = Paragraph::default();
        para.runs.push(Run::plain(text));
        return Ok(Document {
            paragraphs: vec![para],
        });
    }

    let mut doc = Document::default();
    for block in &blocks {
        let mut para = Paragraph::new(block_alignment(block));
        collect_runs(block, StyleSet::none(), &mut para.runs);
        doc.paragraphs.push(para);
    }
    Ok(doc)
}

/// Extract the fragment's full text content, all markup stripped.
///
/// This is the plain-text export source: every DOM text node in document
/// order, concatenated with no separators.
pub fn extract_text(html: &str) -> Result<String, ExportError> {
    let dom = parse_dom(html)?;
    let mut text = String::new();
    collect_text(&dom.document, &mut text);
    Ok(text)
}

fn parse_dom(html: &str) -> Result<RcDom, ExportError> {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| ExportError::ParseError(format!("Failed to parse HTML fragment: {e}")))
}

/// Collect outermost block elements in document order.
///
/// A matched block is not searched for further blocks; its content is
/// consumed as runs of the paragraph it produces.
fn collect_blocks(node: &Handle, blocks: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if matches!(name.local.as_ref(), "p" | "div") {
                blocks.push(child.clone());
                continue;
            }
        }
        collect_blocks(child, blocks);
    }
}

/// Resolve a block's alignment from its inline `style` attribute.
///
/// Declarations are scanned in order and the first `text-align` wins;
/// unknown values (and absence) default to start.
fn block_alignment(block: &Handle) -> Alignment {
    let Some(style) = attr_value(block, "style") else {
        return Alignment::Start;
    };
    for decl in style.split(';') {
        let mut parts = decl.splitn(2, ':');
        let (Some(prop), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        if prop.trim().eq_ignore_ascii_case("text-align") {
            return match value.trim().to_ascii_lowercase().as_str() {
                "center" => Alignment::Center,
                "right" => Alignment::End,
                "justify" => Alignment::Justify,
                _ => Alignment::Start,
            };
        }
    }
    Alignment::Start
}

/// Walk a block's subtree collecting runs, accumulating inline styles.
///
/// `strong`/`b`, `em`/`i` and `u` add to the active style set, so nested
/// tags compose. Unrecognized elements pass their content through with
/// the inherited style instead of being dropped.
fn collect_runs(node: &Handle, style: StyleSet, runs: &mut Vec<Run>) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let text = contents.borrow().to_string();
                if !text.is_empty() {
                    runs.push(Run::styled(text, style));
                }
            }
            NodeData::Element { name, .. } => {
                let style = match name.local.as_ref() {
                    "strong" | "b" => style.with_bold(),
                    "em" | "i" => style.with_italic(),
                    "u" => style.with_underline(),
                    _ => style,
                };
                collect_runs(child, style, runs);
            }
            _ => {}
        }
    }
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            out.push_str(&contents.borrow());
        }
        collect_text(child, out);
    }
}

fn attr_value(node: &Handle, attr_name: &str) -> Option<String> {
    if let NodeData::Element { attrs, .. } = &node.data {
        attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.to_string())
    } else {
        None
    }
}

//! HTML serialization (document model → standalone HTML)
//!
//! Renders the Paragraph/Run model back to a complete HTML5 document
//! with embedded CSS. Pipeline: model → RcDom → HTML string → document
//! wrapper. The PDF exporter feeds this output to the renderer, so the
//! PDF and DOCX encodings always derive from the same model.

use crate::error::ExportError;
use crate::ir::nodes::{Alignment, Document, Run};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Options for HTML serialization
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Optional custom CSS appended after the baseline stylesheet
    pub custom_css: Option<String>,
}

impl HtmlOptions {
    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Serialize a document to a standalone HTML page.
pub fn serialize_document(doc: &Document, options: &HtmlOptions) -> Result<String, ExportError> {
    let dom = build_html_dom(doc);
    let body_html = serialize_dom(&dom)?;
    Ok(wrap_in_document(&body_html, options))
}

/// Build an HTML DOM tree from the document model
fn build_html_dom(doc: &Document) -> RcDom {
    let dom = RcDom::default();
    let container = create_element("div", vec![("class", "export-document")]);

    for paragraph in &doc.paragraphs {
        let mut attrs = Vec::new();
        let style;
        if let Some(value) = alignment_css(paragraph.alignment) {
            style = format!("text-align: {value}");
            attrs.push(("style", style.as_str()));
        }
        let para = create_element("p", attrs);
        for run in &paragraph.runs {
            if run.text.is_empty() {
                continue;
            }
            para.children.borrow_mut().push(run_node(run));
        }
        container.children.borrow_mut().push(para);
    }

    dom.document.children.borrow_mut().push(container);
    dom
}

/// CSS `text-align` value for an alignment; the default emits no style.
fn alignment_css(alignment: Alignment) -> Option<&'static str> {
    match alignment {
        Alignment::Start => None,
        Alignment::Center => Some("center"),
        Alignment::End => Some("right"),
        Alignment::Justify => Some("justify"),
    }
}

/// Wrap a run's text in the inline tags its style set calls for.
fn run_node(run: &Run) -> Handle {
    let mut node = create_text(&run.text);
    if run.style.underline {
        node = wrap(node, "u");
    }
    if run.style.italic {
        node = wrap(node, "em");
    }
    if run.style.bold {
        node = wrap(node, "strong");
    }
    node
}

fn wrap(child: Handle, tag: &str) -> Handle {
    let element = create_element(tag, vec![]);
    element.children.borrow_mut().push(child);
    element
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM to an HTML string (just the inner content)
fn serialize_dom(dom: &RcDom) -> Result<String, ExportError> {
    let mut output = Vec::new();

    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| ExportError::SerializationError("Empty document".to_string()))?
        .clone();

    // IncludeNode serializes each paragraph element together with its children
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            ExportError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| ExportError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, options: &HtmlOptions) -> String {
    let baseline_css = include_str!("../../../css/baseline.css");
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="quill-export">
  <title>Document</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<main class="export-document">
{body_html}
</main>
</body>
</html>"#
    )
}

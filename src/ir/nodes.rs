//! Core data structures for the document model.
//!
//! The model is deliberately small: an ordered list of paragraphs, each
//! carrying an alignment and an ordered list of styled text runs. It is
//! rebuilt from the editor's HTML on every export and never persisted.

/// Paragraph alignment, following CSS `text-align` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Aligned to the writing-direction start (the default).
    #[default]
    Start,
    Center,
    /// Aligned to the writing-direction end (`text-align: right`).
    End,
    Justify,
}

/// Character styling applied to a run of text.
///
/// Styles compose: a run inside `<strong><em>` carries both bold and
/// italic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleSet {
    /// The empty style set (plain text).
    pub const fn none() -> Self {
        StyleSet {
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub const fn with_bold(self) -> Self {
        StyleSet { bold: true, ..self }
    }

    pub const fn with_italic(self) -> Self {
        StyleSet {
            italic: true,
            ..self
        }
    }

    pub const fn with_underline(self) -> Self {
        StyleSet {
            underline: true,
            ..self
        }
    }

    /// True when no style is applied.
    pub const fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.underline
    }
}

/// A contiguous span of text sharing one style set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: StyleSet,
}

impl Run {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            style: StyleSet::none(),
        }
    }

    /// Create a run with the given style set.
    pub fn styled(text: impl Into<String>, style: StyleSet) -> Self {
        Run {
            text: text.into(),
            style,
        }
    }
}

/// A paragraph: an alignment plus an ordered sequence of runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub alignment: Alignment,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(alignment: Alignment) -> Self {
        Paragraph {
            alignment,
            runs: Vec::new(),
        }
    }

    /// The paragraph's text: all run text concatenated in source order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// The root of the model: an ordered sequence of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// All paragraph text concatenated, with no separators.
    pub fn text(&self) -> String {
        self.paragraphs.iter().map(|p| p.text()).collect()
    }

    /// True when the document holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.text().is_empty())
    }
}

//! Core data structures for the Intermediate Representation (IR).

/// One structurally distinct unit of parsed Markdown.
///
/// Text-bearing variants keep bold spans as `**…**` markers with literal
/// marker characters backslash-escaped; they are resolved into runs by
/// [`crate::common::inline::parse_inline_formatting`]. `Code` text is the raw
/// literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { depth: usize, text: String },
    Paragraph { text: String },
    List { ordered: bool, items: Vec<String> },
    Table(TableBlock),
    Code { text: String },
    Blockquote { text: String },
    Rule,
    /// Anything the adapter does not recognise. Rendered as a paragraph when
    /// it carries text, dropped otherwise.
    Other { text: Option<String> },
}

impl Block {
    pub fn heading(depth: usize, text: impl Into<String>) -> Self {
        Block::Heading {
            depth,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Short name used in logs and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::Table(_) => "table",
            Block::Code { .. } => "code",
            Block::Blockquote { .. } => "blockquote",
            Block::Rule => "rule",
            Block::Other { .. } => "other",
        }
    }
}

/// A table as the tokenizer sees it: header cells plus body rows.
///
/// Rows are not required to match the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A contiguous span of text sharing one style, or a forced line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub is_break: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        TextRun {
            text: text.into(),
            bold: false,
            is_break: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        TextRun {
            text: text.into(),
            bold: true,
            is_break: false,
        }
    }

    pub fn line_break() -> Self {
        TextRun {
            text: String::new(),
            bold: false,
            is_break: true,
        }
    }
}

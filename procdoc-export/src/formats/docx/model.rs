//! In-memory Word document model.
//!
//! A deliberately small subset of WordprocessingML: paragraphs with runs,
//! bookmarks and internal hyperlinks, and simple tables. The writer in
//! [`super::writer`] maps each type onto its `w:` element one to one.

use chrono::NaiveDate;

/// A complete document ready for packaging.
#[derive(Debug, Clone, PartialEq)]
pub struct WordDocument {
    pub properties: DocumentProperties,
    pub body: Vec<BodyElement>,
}

/// Values written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentProperties {
    pub title: String,
    pub created: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyElement {
    Paragraph(Paragraph),
    Table(Table),
}

impl BodyElement {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            BodyElement::Paragraph(paragraph) => Some(paragraph),
            BodyElement::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            BodyElement::Table(table) => Some(table),
            BodyElement::Paragraph(_) => None,
        }
    }
}

/// Named paragraph styles defined in `styles.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Title,
    /// `Heading1` .. `Heading6`.
    Heading(usize),
    TocHeading,
    ListParagraph,
}

impl ParagraphStyle {
    pub fn style_id(self) -> String {
        match self {
            ParagraphStyle::Title => "Title".to_string(),
            ParagraphStyle::Heading(level) => format!("Heading{level}"),
            ParagraphStyle::TocHeading => "TOCHeading".to_string(),
            ParagraphStyle::ListParagraph => "ListParagraph".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Spacing in twentieths of a point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

/// List membership of a paragraph. Markers are never part of the text;
/// unordered items get a bullet numbering definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProps {
    pub ordered: bool,
    pub level: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub alignment: Option<Alignment>,
    pub spacing: Option<Spacing>,
    /// Left indent in twips.
    pub indent_left: Option<u32>,
    pub list: Option<ListProps>,
    pub children: Vec<Inline>,
}

impl Paragraph {
    pub fn new() -> Self {
        Paragraph::default()
    }

    pub fn with_runs(runs: Vec<Run>) -> Self {
        Paragraph {
            children: runs.into_iter().map(Inline::Run).collect(),
            ..Paragraph::default()
        }
    }

    pub fn style(mut self, style: ParagraphStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing = Some(Spacing { before, after });
        self
    }

    pub fn indent_left(mut self, twips: u32) -> Self {
        self.indent_left = Some(twips);
        self
    }

    pub fn list(mut self, ordered: bool) -> Self {
        self.list = Some(ListProps { ordered, level: 0 });
        self
    }

    pub fn push(mut self, inline: Inline) -> Self {
        self.children.push(inline);
        self
    }

    /// A paragraph holding a single page break.
    pub fn page_break() -> Self {
        Paragraph::with_runs(vec![Run::page_break()])
    }

    /// All runs in document order, looking inside bookmarks and hyperlinks.
    pub fn runs(&self) -> Vec<&Run> {
        let mut runs = Vec::new();
        for child in &self.children {
            match child {
                Inline::Run(run) => runs.push(run),
                Inline::Bookmark(bookmark) => runs.extend(bookmark.runs.iter()),
                Inline::Hyperlink(link) => runs.extend(link.runs.iter()),
            }
        }
        runs
    }

    /// Concatenated text, with line breaks as `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in self.runs() {
            match &run.content {
                RunContent::Text(text) => out.push_str(text),
                RunContent::Break => out.push('\n'),
                RunContent::PageBreak => {}
            }
        }
        out
    }

    pub fn bookmark(&self) -> Option<&Bookmark> {
        self.children.iter().find_map(|child| match child {
            Inline::Bookmark(bookmark) => Some(bookmark),
            _ => None,
        })
    }

    pub fn hyperlink(&self) -> Option<&Hyperlink> {
        self.children.iter().find_map(|child| match child {
            Inline::Hyperlink(link) => Some(link),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Run(Run),
    Bookmark(Bookmark),
    Hyperlink(Hyperlink),
}

/// Named location wrapping a span of runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    pub id: u32,
    pub name: String,
    pub runs: Vec<Run>,
}

/// Internal hyperlink to a bookmark.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    pub anchor: String,
    pub runs: Vec<Run>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    Text(String),
    Break,
    PageBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub content: RunContent,
    pub bold: bool,
    /// Font size in half-points.
    pub size: Option<u32>,
    pub font: Option<String>,
    /// Hex RGB without the leading `#`.
    pub color: Option<String>,
    /// Character style id, e.g. `Hyperlink`.
    pub character_style: Option<String>,
}

impl Run {
    fn with_content(content: RunContent) -> Self {
        Run {
            content,
            bold: false,
            size: None,
            font: None,
            color: None,
            character_style: None,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Run::with_content(RunContent::Text(text.into()))
    }

    pub fn line_break() -> Self {
        Run::with_content(RunContent::Break)
    }

    pub fn page_break() -> Self {
        Run::with_content(RunContent::PageBreak)
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    pub fn font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn character_style(mut self, style: impl Into<String>) -> Self {
        self.character_style = Some(style.into());
        self
    }

    pub fn is_break(&self) -> bool {
        self.content == RunContent::Break
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A table sized as a percentage of the text width.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub width_percent: f64,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Repeated as a header row on every page.
    pub header: bool,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub width_percent: f64,
    /// Never empty once built by the translator; Word requires a paragraph
    /// in every cell.
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

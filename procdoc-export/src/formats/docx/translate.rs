//! Block translator: `Block` → Word body elements.
//!
//! Translation never fails. Malformed input is absorbed: out-of-range
//! heading depths become level 1, empty table rows are skipped and blocks
//! without text are dropped.
//!
//! Heading anchors come from the shared [`Outline`], never from a counter
//! local to this pass.

use super::model::{
    BodyElement, Bookmark, Inline, Paragraph, ParagraphStyle, Run, Table, TableCell, TableRow,
};
use super::style::DocxStyle;
use crate::common::inline::{parse_inline_formatting, split_line_breaks, strip_inline_markers};
use crate::common::outline::{clamp_heading_depth, Outline};
use crate::ir::nodes::{Block, TableBlock, TextRun};
use tracing::{debug, warn};

pub struct BlockTranslator<'a> {
    style: &'a DocxStyle,
    outline: &'a Outline,
}

impl<'a> BlockTranslator<'a> {
    /// `outline` must have been built from the same block stream that is
    /// later passed to [`BlockTranslator::translate_blocks`].
    pub fn new(style: &'a DocxStyle, outline: &'a Outline) -> Self {
        BlockTranslator { style, outline }
    }

    pub fn translate_blocks(&self, blocks: &[Block]) -> Vec<BodyElement> {
        let mut elements = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            elements.extend(self.translate_block(index, block));
        }
        debug!(
            blocks = blocks.len(),
            elements = elements.len(),
            "translated body"
        );
        elements
    }

    /// Translate the block found at `index` of the stream.
    pub fn translate_block(&self, index: usize, block: &Block) -> Vec<BodyElement> {
        match block {
            Block::Heading { depth, text } => vec![self.heading(index, *depth, text)],
            Block::Paragraph { text } => vec![self.paragraph(text)],
            Block::Table(table) => vec![self.table(table)],
            Block::List { ordered, items } => items
                .iter()
                .map(|item| self.list_item(*ordered, item))
                .collect(),
            Block::Code { text } => vec![self.code(text)],
            Block::Blockquote { text } => vec![self.blockquote(text)],
            Block::Rule => vec![self.rule()],
            Block::Other { text: Some(text) } if !text.is_empty() => vec![self.paragraph(text)],
            Block::Other { .. } => Vec::new(),
        }
    }

    fn heading(&self, index: usize, depth: usize, text: &str) -> BodyElement {
        let level = clamp_heading_depth(depth);
        if level != depth {
            warn!(depth, "heading depth out of range, using level 1");
        }

        let runs = vec![Run::text(strip_inline_markers(text))];
        let paragraph = Paragraph::new()
            .style(ParagraphStyle::Heading(level))
            .spacing(
                self.style.heading_spacing_before(level),
                self.style.heading_spacing_after,
            );

        let paragraph = match self.outline.anchor_for_block(index) {
            Some(anchor) => paragraph.push(Inline::Bookmark(Bookmark {
                id: anchor.0,
                name: anchor.bookmark_name(),
                runs,
            })),
            None => {
                warn!(index, "heading missing from outline, emitting without bookmark");
                runs.into_iter()
                    .fold(paragraph, |p, run| p.push(Inline::Run(run)))
            }
        };
        BodyElement::Paragraph(paragraph)
    }

    fn paragraph(&self, text: &str) -> BodyElement {
        BodyElement::Paragraph(
            Paragraph::with_runs(self.body_runs(text)).spacing(0, self.style.paragraph_spacing_after),
        )
    }

    fn list_item(&self, ordered: bool, text: &str) -> BodyElement {
        BodyElement::Paragraph(
            Paragraph::with_runs(self.body_runs(text))
                .style(ParagraphStyle::ListParagraph)
                .list(ordered)
                .spacing(0, self.style.list_spacing_after),
        )
    }

    fn code(&self, text: &str) -> BodyElement {
        let runs = split_line_breaks(text, false)
            .into_iter()
            .map(|run| {
                if run.is_break {
                    Run::line_break()
                } else {
                    Run::text(run.text)
                        .font(self.style.code_font.clone())
                        .size(self.style.code_size)
                }
            })
            .collect();
        BodyElement::Paragraph(
            Paragraph::with_runs(runs).spacing(0, self.style.paragraph_spacing_after),
        )
    }

    fn blockquote(&self, text: &str) -> BodyElement {
        let runs = self
            .body_runs(text)
            .into_iter()
            .map(|run| {
                if run.is_break() {
                    run
                } else {
                    run.color(self.style.quote_color.clone())
                }
            })
            .collect();
        BodyElement::Paragraph(
            Paragraph::with_runs(runs)
                .indent_left(self.style.quote_indent)
                .spacing(0, self.style.paragraph_spacing_after),
        )
    }

    fn rule(&self) -> BodyElement {
        let run = Run::text(self.style.rule_text())
            .size(self.style.body_size)
            .color(self.style.rule_color.clone());
        BodyElement::Paragraph(
            Paragraph::with_runs(vec![run]).spacing(0, self.style.paragraph_spacing_after),
        )
    }

    fn table(&self, table: &TableBlock) -> BodyElement {
        let mut rows = Vec::new();

        if !table.header.is_empty() {
            rows.push(self.table_row(&table.header, true));
        }

        for row in &table.rows {
            if row.is_empty() {
                debug!("skipping table row without cells");
                continue;
            }
            rows.push(self.table_row(row, false));
        }

        BodyElement::Table(Table {
            width_percent: 100.0,
            rows,
        })
    }

    /// Each row is sized by its own cell count, independently of the header.
    fn table_row(&self, cells: &[String], header: bool) -> TableRow {
        let width_percent = 100.0 / cells.len() as f64;
        let cells = cells
            .iter()
            .map(|cell| {
                let runs = self
                    .body_runs(cell)
                    .into_iter()
                    .map(|run| if header { run.bold(true) } else { run })
                    .collect();
                TableCell {
                    width_percent,
                    paragraphs: vec![Paragraph::with_runs(runs)],
                }
            })
            .collect();
        TableRow { header, cells }
    }

    fn body_runs(&self, text: &str) -> Vec<Run> {
        parse_inline_formatting(Some(text))
            .into_iter()
            .map(|run| self.run(run))
            .collect()
    }

    fn run(&self, run: TextRun) -> Run {
        if run.is_break {
            Run::line_break()
        } else {
            Run::text(run.text)
                .bold(run.bold)
                .size(self.style.body_size)
        }
    }
}

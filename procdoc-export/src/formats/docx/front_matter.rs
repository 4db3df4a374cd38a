//! Cover page and table of contents.

use super::model::{
    Alignment, BodyElement, Hyperlink, Inline, Paragraph, ParagraphStyle, Run, Table, TableCell,
    TableRow,
};
use super::style::DocxStyle;
use crate::common::outline::Outline;
use crate::source::ProjectInfo;
use chrono::NaiveDate;

const LABEL_COLUMN_PERCENT: f64 = 30.0;
const VALUE_COLUMN_PERCENT: f64 = 70.0;
const TOC_TITLE_SIZE: u32 = 28;
const COVER_TITLE_SPACING: u32 = 400;

/// Document title used on the cover and above the body.
pub fn document_title<'a>(info: &'a ProjectInfo, style: &'a DocxStyle) -> &'a str {
    info.project_name()
        .unwrap_or(style.labels.default_title.as_str())
}

/// Title paragraph followed by the five-row project table.
pub fn build_cover(info: &ProjectInfo, generated_on: NaiveDate, style: &DocxStyle) -> Vec<BodyElement> {
    let title = Paragraph::with_runs(vec![Run::text(document_title(info, style))])
        .style(ParagraphStyle::Title)
        .alignment(Alignment::Center)
        .spacing(COVER_TITLE_SPACING, COVER_TITLE_SPACING);

    let date = generated_on.format("%Y-%m-%d").to_string();
    let labels = &style.labels;
    let rows = [
        (&labels.project_name, info.project_name.as_deref()),
        (&labels.procurement_unit, info.procurement_unit.as_deref()),
        (&labels.service_period, info.service_period.as_deref()),
        (&labels.service_location, info.service_location.as_deref()),
        (&labels.generated_on, Some(date.as_str())),
    ];

    let rows = rows
        .iter()
        .map(|(label, value)| TableRow {
            header: false,
            cells: vec![
                cover_cell(label, true, LABEL_COLUMN_PERCENT, style),
                cover_cell(value.unwrap_or(""), false, VALUE_COLUMN_PERCENT, style),
            ],
        })
        .collect();

    vec![
        BodyElement::Paragraph(title),
        BodyElement::Table(Table {
            width_percent: 100.0,
            rows,
        }),
    ]
}

fn cover_cell(text: &str, bold: bool, width_percent: f64, style: &DocxStyle) -> TableCell {
    let runs = if text.is_empty() {
        Vec::new()
    } else {
        vec![Run::text(text).bold(bold).size(style.body_size)]
    };
    TableCell {
        width_percent,
        paragraphs: vec![Paragraph::with_runs(runs)],
    }
}

/// TOC title plus one hyperlink per outline entry, indented by depth.
pub fn build_toc(outline: &Outline, style: &DocxStyle) -> Vec<BodyElement> {
    let mut elements = Vec::with_capacity(outline.len() + 1);

    elements.push(BodyElement::Paragraph(
        Paragraph::with_runs(vec![Run::text(style.labels.toc_title.as_str())
            .bold(true)
            .size(TOC_TITLE_SIZE)])
        .style(ParagraphStyle::TocHeading)
        .spacing(0, style.heading_spacing_after),
    ));

    for entry in outline.entries() {
        let link = Hyperlink {
            anchor: entry.anchor.bookmark_name(),
            runs: vec![Run::text(entry.text.as_str())
                .size(style.body_size)
                .character_style("Hyperlink")],
        };
        let indent = (entry.depth as u32 - 1) * style.toc_indent_step;
        elements.push(BodyElement::Paragraph(
            Paragraph::new()
                .indent_left(indent)
                .spacing(0, style.list_spacing_after)
                .push(Inline::Hyperlink(link)),
        ));
    }

    elements
}

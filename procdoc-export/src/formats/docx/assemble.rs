//! Document assembler: cover → TOC → page break → title → body.

use super::front_matter::{build_cover, build_toc, document_title};
use super::model::{
    Alignment, BodyElement, Bookmark, DocumentProperties, Inline, Paragraph, ParagraphStyle, Run,
    WordDocument,
};
use super::style::DocxStyle;
use super::translate::BlockTranslator;
use crate::common::outline::{Outline, TITLE_BOOKMARK};
use crate::ir::nodes::Block;
use crate::source::ProjectInfo;
use chrono::NaiveDate;
use tracing::debug;

/// Bookmark id of the generated title. Section anchors start at 1.
pub const TITLE_BOOKMARK_ID: u32 = 0;

/// Which front-matter sections to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter {
    pub cover: bool,
    pub toc: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        FrontMatter {
            cover: true,
            toc: true,
        }
    }
}

/// Build the full document for one export.
///
/// The outline is computed once here and shared by the TOC and the body, so
/// every call starts numbering at 1.
pub fn assemble_document(
    blocks: &[Block],
    info: &ProjectInfo,
    generated_on: NaiveDate,
    style: &DocxStyle,
    front_matter: FrontMatter,
) -> WordDocument {
    let outline = Outline::from_blocks(blocks);
    let title = document_title(info, style).to_string();

    let mut body = Vec::new();
    if front_matter.cover {
        body.extend(build_cover(info, generated_on, style));
    }
    if front_matter.toc {
        body.extend(build_toc(&outline, style));
    }
    if front_matter.cover || front_matter.toc {
        body.push(BodyElement::Paragraph(Paragraph::page_break()));
    }

    body.push(BodyElement::Paragraph(
        Paragraph::new()
            .style(ParagraphStyle::Heading(1))
            .alignment(Alignment::Center)
            .spacing(style.heading_spacing_after, style.heading_spacing_after)
            .push(Inline::Bookmark(Bookmark {
                id: TITLE_BOOKMARK_ID,
                name: TITLE_BOOKMARK.to_string(),
                runs: vec![Run::text(title.as_str())],
            })),
    ));

    let translator = BlockTranslator::new(style, &outline);
    body.extend(translator.translate_blocks(blocks));

    debug!(
        headings = outline.len(),
        elements = body.len(),
        "assembled document"
    );

    WordDocument {
        properties: DocumentProperties {
            title,
            created: generated_on,
        },
        body,
    }
}

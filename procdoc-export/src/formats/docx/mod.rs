//! DOCX format implementation
//!
//! Converts the Markdown of an export request into an Office Open XML
//! word-processing package: cover page, hyperlinked table of contents, title
//! and body.
//!
//! # Pipeline
//!
//! Markdown → [`tokenize`](crate::formats::markdown::tokenize) → `Block`s →
//! [`Outline`](crate::common::outline::Outline) → [`assemble_document`] →
//! [`WordDocument`] → [`write_package`] → `.docx` bytes
//!
//! # Library Choice
//!
//! There is no maintained pure-Rust DOCX writer that supports bookmarks and
//! internal hyperlinks, so the package is written directly:
//! - `quick-xml`: event writer for the generated XML parts, handling escaping
//! - `zip` (deflate via `flate2`): the OPC container
//!
//! # Element Mapping Table
//!
//! | Block             | WordprocessingML                                    | Notes                                   |
//! |-------------------|-----------------------------------------------------|-----------------------------------------|
//! | Heading           | `w:p` + `HeadingN` style + `w:bookmarkStart/End`    | Bookmark `section<N>`, depth clamped    |
//! | Paragraph         | `w:p` with runs                                     | Bold spans → `w:b`, breaks → `w:br`     |
//! | List item         | `w:p` + `ListParagraph`                             | Bullets via `w:numPr`, no marker text   |
//! | Table             | `w:tbl` + `TableGrid`                               | Header row repeats, per-row cell widths |
//! | Code              | `w:p`, `w:rFonts` fixed-width runs                  | One run per line                        |
//! | Blockquote        | `w:p` + `w:ind` + muted `w:color`                   |                                         |
//! | Rule              | `w:p` with a line of box-drawing characters         |                                         |
//! | Other             | like Paragraph, or nothing                          |                                         |
//!
//! # Options
//!
//! | Option  | Values         | Effect                          |
//! |---------|----------------|---------------------------------|
//! | `cover` | `true`/`false` | Emit the cover page             |
//! | `toc`   | `true`/`false` | Emit the table of contents      |
//!
//! Other options are ignored.

pub mod assemble;
pub mod front_matter;
pub mod model;
pub mod style;
pub mod translate;
pub mod writer;

pub use assemble::{assemble_document, FrontMatter};
pub use model::WordDocument;
pub use style::{CoverLabels, DocxStyle};
pub use writer::write_package;

use crate::error::FormatError;
use crate::format::{parse_flag, ExportRequest, Format, SerializedDocument};
use std::collections::HashMap;
use tracing::debug;

/// Format implementation for Word documents
#[derive(Debug, Clone, Default)]
pub struct DocxFormat {
    style: DocxStyle,
    front_matter: FrontMatter,
}

impl DocxFormat {
    pub fn new(style: DocxStyle, front_matter: FrontMatter) -> Self {
        Self {
            style,
            front_matter,
        }
    }

    pub fn with_style(style: DocxStyle) -> Self {
        Self::new(style, FrontMatter::default())
    }

    pub fn style(&self) -> &DocxStyle {
        &self.style
    }

    /// Build the document model without packaging it.
    pub fn document(&self, request: &ExportRequest, front_matter: FrontMatter) -> WordDocument {
        let blocks = request.blocks();
        assemble_document(
            &blocks,
            &request.project_info,
            request.generated_on,
            &self.style,
            front_matter,
        )
    }

    /// Build and package the document. Any failure is reported as a
    /// serialization error.
    pub fn render(
        &self,
        request: &ExportRequest,
        front_matter: FrontMatter,
    ) -> Result<Vec<u8>, FormatError> {
        let document = self.document(request, front_matter);
        write_package(&document, &self.style).map_err(FormatError::into_serialization)
    }

    fn front_matter_from(&self, options: &HashMap<String, String>) -> Result<FrontMatter, FormatError> {
        let mut front_matter = self.front_matter;
        for (key, value) in options {
            match key.as_str() {
                "cover" => front_matter.cover = parse_flag(key, value)?,
                "toc" => front_matter.toc = parse_flag(key, value)?,
                _ => debug!(option = %key, "ignoring unknown docx option"),
            }
        }
        Ok(front_matter)
    }
}

impl Format for DocxFormat {
    fn name(&self) -> &str {
        "docx"
    }

    fn description(&self) -> &str {
        "Word document (Office Open XML) with cover page and table of contents"
    }

    fn file_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn serialize(&self, _request: &ExportRequest) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(
            "DOCX produces binary output; use serialize_with_options".to_string(),
        ))
    }

    fn serialize_with_options(
        &self,
        request: &ExportRequest,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        let front_matter = self.front_matter_from(options)?;
        self.render(request, front_matter)
            .map(SerializedDocument::Binary)
    }
}

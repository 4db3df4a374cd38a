//! Word-compatible HTML (`.doc`)
//!
//! The quick export path: the HTML preview of the source wrapped in a page
//! that declares the Office namespaces. Word opens the file as a document,
//! with its own default styles and without the cover page, table of contents
//! or bookmarks that the `docx` format builds. Use `docx` for the real
//! document; this format exists for callers that only want the content in
//! Word.
//!
//! No options are recognized.

use crate::error::FormatError;
use crate::format::{ExportRequest, Format, SerializedDocument};
use crate::formats::html::serialize_to_word_html;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct WordHtmlFormat;

impl Format for WordHtmlFormat {
    fn name(&self) -> &str {
        "doc"
    }

    fn description(&self) -> &str {
        "HTML page Word opens as a document (no cover page or table of contents)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["doc"]
    }

    fn serialize(&self, request: &ExportRequest) -> Result<String, FormatError> {
        serialize_to_word_html(request)
    }

    fn serialize_with_options(
        &self,
        request: &ExportRequest,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        for key in options.keys() {
            debug!(option = %key, "ignoring unknown doc option");
        }
        self.serialize(request).map(SerializedDocument::Text)
    }
}

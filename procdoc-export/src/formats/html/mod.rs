//! HTML preview format
//!
//! Renders the request's Markdown to HTML for preview panes. By default the
//! output is a fragment; with `standalone=true` it is wrapped in a complete
//! HTML5 document with an embedded stylesheet.
//!
//! # Library Choice
//!
//! We use `comrak` for rendering, the same crate the tokenizer uses, with the
//! same [`MarkdownOptions`](crate::formats::markdown::MarkdownOptions). The
//! preview therefore agrees with the DOCX export on what is a table, a hard
//! break or an autolink.
//!
//! # Options
//!
//! | Option       | Values          | Effect                                           |
//! |--------------|-----------------|--------------------------------------------------|
//! | `standalone` | `true`/`false`  | Wrap in `<html>` with `css/preview.css` embedded |
//! | `css`        | any CSS text    | Appended after the preview stylesheet            |
//!
//! Raw HTML in the source is escaped, never passed through.

mod serializer;

use crate::error::FormatError;
use crate::format::{parse_flag, ExportRequest, Format, SerializedDocument};
use std::collections::HashMap;
use tracing::debug;

pub use serializer::{
    serialize_to_html, serialize_to_html_with_options, serialize_to_word_html, HtmlOptions,
};

/// Format implementation for HTML previews
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Create an HTML format producing complete documents
    pub fn standalone() -> Self {
        Self::new(HtmlOptions {
            standalone: true,
            ..HtmlOptions::default()
        })
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML preview rendered from the Markdown source"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn serialize(&self, request: &ExportRequest) -> Result<String, FormatError> {
        serialize_to_html_with_options(request, &self.options)
    }

    fn serialize_with_options(
        &self,
        request: &ExportRequest,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        let mut html_options = self.options.clone();
        for (key, value) in options {
            match key.as_str() {
                "standalone" => html_options.standalone = parse_flag(key, value)?,
                "css" => html_options.custom_css = Some(value.clone()),
                _ => debug!(option = %key, "ignoring unknown html option"),
            }
        }

        serialize_to_html_with_options(request, &html_options).map(SerializedDocument::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_by_default() {
        let request = ExportRequest::new("# Hi\n\nSome **bold** text");
        let html = HtmlFormat::default().serialize(&request).unwrap();
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn standalone_option_wraps_document() {
        let request = ExportRequest::new("text");
        let mut options = HashMap::new();
        options.insert("standalone".to_string(), "true".to_string());
        options.insert("css".to_string(), ".x { color: red; }".to_string());

        let html = HtmlFormat::default()
            .serialize_with_options(&request, &options)
            .unwrap()
            .into_bytes();
        let html = String::from_utf8(html).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(".procdoc-preview"));
        assert!(html.contains(".x { color: red; }"));
    }

    #[test]
    fn bad_flag_is_rejected() {
        let request = ExportRequest::new("text");
        let mut options = HashMap::new();
        options.insert("standalone".to_string(), "maybe".to_string());
        let result = HtmlFormat::default().serialize_with_options(&request, &options);
        assert!(matches!(result, Err(FormatError::ParseError(_))));
    }
}

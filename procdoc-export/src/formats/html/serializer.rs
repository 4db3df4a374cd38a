//! HTML serialization (Markdown → HTML preview)
//!
//! Pipeline: Markdown string → Comrak → HTML fragment → optional document wrapper
//!
//! The Word wrapper declares the Office namespaces so that Word opens the
//! page as a document when it is saved with a `.doc` extension.

use crate::error::FormatError;
use crate::format::ExportRequest;
use comrak::markdown_to_html;

const DEFAULT_TITLE: &str = "Procurement Document";

/// Options for HTML serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Emit a complete HTML5 document instead of a fragment
    pub standalone: bool,
    /// Optional custom CSS to append after the preview stylesheet
    pub custom_css: Option<String>,
}

/// Render the request as an HTML fragment
pub fn serialize_to_html(request: &ExportRequest) -> Result<String, FormatError> {
    serialize_to_html_with_options(request, &HtmlOptions::default())
}

/// Render the request with full options
pub fn serialize_to_html_with_options(
    request: &ExportRequest,
    options: &HtmlOptions,
) -> Result<String, FormatError> {
    let mut comrak_options = request.markdown_options.comrak_options();
    comrak_options.render.escape = true;
    let fragment = markdown_to_html(&request.markdown, &comrak_options);

    if !options.standalone {
        return Ok(fragment);
    }

    let title = request.project_info.project_name().unwrap_or(DEFAULT_TITLE);
    Ok(wrap_in_document(&fragment, title, options))
}

/// Render the fragment inside an HTML page Word opens as a document.
pub fn serialize_to_word_html(request: &ExportRequest) -> Result<String, FormatError> {
    let fragment = serialize_to_html(request)?;
    let title = html_escape(request.project_info.project_name().unwrap_or(DEFAULT_TITLE));

    Ok(format!(
        r#"<html xmlns:o="urn:schemas-microsoft-com:office:office" xmlns:w="urn:schemas-microsoft-com:office:word" xmlns="http://www.w3.org/TR/REC-html40">
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
{fragment}</body>
</html>
"#
    ))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, title: &str, options: &HtmlOptions) -> String {
    let preview_css = include_str!("../../../css/preview.css");
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="procdoc">
  <title>{escaped_title}</title>
  <style>
{preview_css}
{custom_css}
  </style>
</head>
<body>
<div class="procdoc-preview">
{body_html}
</div>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

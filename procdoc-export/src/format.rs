//! Format trait definition
//!
//! Every output format renders the same [`ExportRequest`]: one logical
//! Markdown document plus the project metadata and the generation date. The
//! trait gives the registry and the publish pipeline a uniform interface over
//! text formats (HTML, plain text) and binary ones (DOCX).

use crate::error::FormatError;
use crate::formats::markdown::{tokenize, MarkdownOptions};
use crate::ir::nodes::Block;
use crate::source::{ProjectInfo, SourceDocument};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Serialized output produced by a [`Format`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializedDocument {
    /// UTF-8 text output (e.g., HTML, plain text)
    Text(String),
    /// Binary output (e.g., DOCX)
    Binary(Vec<u8>),
}

impl SerializedDocument {
    /// Consume the serialized output and return the underlying bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            SerializedDocument::Text(text) => text.into_bytes(),
            SerializedDocument::Binary(bytes) => bytes,
        }
    }
}

/// Everything one export call needs. Built fresh per export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub markdown: String,
    pub project_info: ProjectInfo,
    /// Local calendar date shown on the cover and used in the file name.
    pub generated_on: NaiveDate,
    pub markdown_options: MarkdownOptions,
}

impl ExportRequest {
    pub fn new(markdown: impl Into<String>) -> Self {
        ExportRequest {
            markdown: markdown.into(),
            project_info: ProjectInfo::default(),
            generated_on: Local::now().date_naive(),
            markdown_options: MarkdownOptions::default(),
        }
    }

    /// Request for the concatenated chapters of `source`.
    pub fn from_source(source: &SourceDocument) -> Self {
        ExportRequest::new(source.to_markdown())
    }

    pub fn with_project_info(mut self, info: ProjectInfo) -> Self {
        self.project_info = info;
        self
    }

    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = date;
        self
    }

    pub fn with_markdown_options(mut self, options: MarkdownOptions) -> Self {
        self.markdown_options = options;
        self
    }

    /// Tokenize the Markdown with this request's options.
    pub fn blocks(&self) -> Vec<Block> {
        tokenize(&self.markdown, &self.markdown_options)
    }

    /// Suggested output file name: `<projectName>_<YYYY-MM-DD>.<extension>`.
    ///
    /// Falls back to `default_name` when the project has no name. Characters
    /// that cannot appear in a file name are replaced with `_`.
    pub fn file_name(&self, default_name: &str, extension: &str) -> String {
        let name = self.project_info.project_name().unwrap_or(default_name);
        let name: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        format!(
            "{}_{}.{}",
            name,
            self.generated_on.format("%Y-%m-%d"),
            extension
        )
    }
}

/// Trait for output formats
///
/// Text formats implement [`Format::serialize`] and inherit the default
/// [`Format::serialize_with_options`]. Binary formats override
/// `serialize_with_options` and return [`SerializedDocument::Binary`].
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn serialize(&self, request: &ExportRequest) -> Result<String, FormatError> {
///         Ok(request.markdown.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "docx", "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// The first entry is used for suggested file names. Used for automatic
    /// format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether the output is binary and therefore needs a destination path.
    fn is_binary(&self) -> bool {
        false
    }

    /// Render the request as text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _request: &ExportRequest) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support text serialization",
            self.name()
        )))
    }

    /// Render the request, optionally using extra parameters.
    ///
    /// Formats that only emit textual output can rely on the default
    /// implementation, which delegates to [`Format::serialize`].
    fn serialize_with_options(
        &self,
        request: &ExportRequest,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        if options.is_empty() {
            self.serialize(request).map(SerializedDocument::Text)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Parse a boolean format option. An empty value counts as `true`, so a bare
/// `--extra-standalone` flag enables it.
pub(crate) fn parse_flag(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        other => Err(FormatError::ParseError(format!(
            "option '{key}' expects true or false, got '{other}'"
        ))),
    }
}

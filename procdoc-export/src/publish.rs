//! Document publishing pipeline.
//!
//! Provides a high-level API for exporting a request to an output format.
//! This module bridges the gap between the format registry and file I/O,
//! handling both in-memory and file-based output.
//!
//! Use this for commands like "Export to Word" where you want a single
//! function call that handles format selection, serialization, naming and
//! file writing.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::error::FormatError;
use crate::format::{ExportRequest, SerializedDocument};
use crate::registry::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File stem used when the project has no name.
pub const DEFAULT_PROJECT_NAME: &str = "Procurement Document";

/// Specifies how to publish a request.
///
/// Use the builder pattern to configure the publication:
///
/// ```ignore
/// let spec = PublishSpec::new(&request, "docx")
///     .with_output_dir("out")
///     .with_option("toc", "false");
/// ```
///
/// If no destination is provided, text formats return in-memory content.
/// Binary formats (like DOCX) require an output path or directory.
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The export request to render.
    pub request: &'a ExportRequest,
    /// Target format name (e.g., "docx", "html").
    pub format: &'a str,
    /// Explicit file path for writing output.
    pub output: Option<PathBuf>,
    /// Directory receiving `<projectName>_<YYYY-MM-DD>.<ext>`. Ignored when
    /// `output` is set.
    pub output_dir: Option<PathBuf>,
    /// File stem used when the project has no name.
    pub default_name: String,
    /// Format-specific options (e.g., cover, toc).
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    /// Creates a new publish specification for the given request and format.
    pub fn new(request: &'a ExportRequest, format: &'a str) -> Self {
        Self {
            request,
            format,
            output: None,
            output_dir: None,
            default_name: DEFAULT_PROJECT_NAME.to_string(),
            options: HashMap::new(),
        }
    }

    /// Sets the output file path. If provided, content is written to disk.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output = Some(path.as_ref().to_path_buf());
        self
    }

    /// Writes into `dir` under the suggested file name.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Adds a format-specific option.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory (for text formats without a destination).
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    /// The published artifact (in-memory content or file path).
    pub artifact: PublishArtifact,
}

/// Publishes a request as described by `spec`.
///
/// Uses the default format registry to find the appropriate serializer.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - The format is not supported
/// - Serialization fails
/// - File I/O fails
/// - A binary format is requested without a destination
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with(&FormatRegistry::with_defaults(), spec)
}

/// Like [`publish`], using the formats registered in `registry`.
pub fn publish_with(
    registry: &FormatRegistry,
    spec: PublishSpec<'_>,
) -> Result<PublishResult, FormatError> {
    let format = registry.get(spec.format)?;
    let destination = match (&spec.output, &spec.output_dir) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(dir)) => {
            let extension = format
                .file_extensions()
                .first()
                .copied()
                .unwrap_or(spec.format);
            Some(dir.join(spec.request.file_name(&spec.default_name, extension)))
        }
        (None, None) => None,
    };

    // Rendered fully in memory before anything touches the disk.
    let serialized = format.serialize_with_options(spec.request, &spec.options)?;
    match serialized {
        SerializedDocument::Text(text) => write_or_return_text(text, destination),
        SerializedDocument::Binary(bytes) => write_binary(bytes, destination),
    }
}

fn write_or_return_text(
    text: String,
    output: Option<PathBuf>,
) -> Result<PublishResult, FormatError> {
    if let Some(path) = output {
        write_to_path(path, text.into_bytes()).map(|path| PublishResult {
            artifact: PublishArtifact::File(path),
        })
    } else {
        Ok(PublishResult {
            artifact: PublishArtifact::InMemory(text),
        })
    }
}

fn write_binary(bytes: Vec<u8>, output: Option<PathBuf>) -> Result<PublishResult, FormatError> {
    let path = output.ok_or_else(|| {
        FormatError::SerializationError(
            "binary formats require an explicit output path".to_string(),
        )
    })?;
    write_to_path(path, bytes).map(|path| PublishResult {
        artifact: PublishArtifact::File(path),
    })
}

fn write_to_path(path: PathBuf, bytes: Vec<u8>) -> Result<PathBuf, FormatError> {
    fs::write(&path, &bytes).map_err(|err| {
        FormatError::SerializationError(format!("{}: {err}", path.display()))
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote export");
    Ok(path)
}

//! Output formats by name and by file extension.
//!
//! The CLI and [`crate::publish`] never name a format type directly: they ask
//! the registry for `"docx"` or for whatever matches `tender.html`. Callers
//! that need a differently styled Word export register their own
//! [`DocxFormat`](crate::formats::DocxFormat), which replaces the default one.

use crate::error::FormatError;
use crate::format::{ExportRequest, Format, SerializedDocument};
use crate::formats::{DocxFormat, HtmlFormat, TextFormat, WordHtmlFormat};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Output formats keyed by name, iterated in name order.
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// A registry without any format.
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// `doc`, `docx`, `html` and `text` with their default settings.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DocxFormat::default());
        registry.register(WordHtmlFormat);
        registry.register(HtmlFormat::default());
        registry.register(TextFormat);
        registry
    }

    /// Add `format`, replacing any format of the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(Box::as_ref)
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn formats(&self) -> impl Iterator<Item = &dyn Format> + '_ {
        self.formats.values().map(Box::as_ref)
    }

    /// The format whose extensions include the extension of `path`, compared
    /// case-insensitively.
    pub fn for_path(&self, path: impl AsRef<Path>) -> Option<&dyn Format> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        self.formats().find(|format| {
            format
                .file_extensions()
                .iter()
                .any(|candidate| *candidate == extension)
        })
    }

    /// Render `request` with the named format.
    pub fn render(
        &self,
        request: &ExportRequest,
        name: &str,
        options: &HashMap<String, String>,
    ) -> Result<SerializedDocument, FormatError> {
        self.get(name)?.serialize_with_options(request, options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

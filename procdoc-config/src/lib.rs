//! Shared configuration loader for the procdoc toolchain.
//!
//! `defaults/procdoc.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files
//! on top of those defaults via [`Loader`] before deserializing into
//! [`ProcdocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use procdoc_export::formats::docx::{CoverLabels, DocxStyle, FrontMatter};
use procdoc_export::formats::markdown::MarkdownOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/procdoc.default.toml");

/// Top-level configuration consumed by procdoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcdocConfig {
    pub markdown: MarkdownConfig,
    pub export: ExportConfig,
    pub docx: DocxConfig,
}

impl ProcdocConfig {
    /// Word styling with the configured fallback title applied.
    pub fn docx_style(&self) -> DocxStyle {
        let mut style = DocxStyle::from(&self.docx);
        style.labels.default_title = self.export.default_project_name.clone();
        style
    }

    pub fn front_matter(&self) -> FrontMatter {
        FrontMatter {
            cover: self.export.include_cover,
            toc: self.export.include_toc,
        }
    }
}

/// Tokenizer switches.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub gfm: bool,
    pub breaks: bool,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            gfm: config.gfm,
            breaks: config.breaks,
        }
    }
}

/// Export-wide settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    pub default_project_name: String,
    pub format: String,
    pub include_cover: bool,
    pub include_toc: bool,
}

/// Mirrors the knobs exposed by the DOCX writer.
#[derive(Debug, Clone, Deserialize)]
pub struct DocxConfig {
    pub body_size: u32,
    pub code_size: u32,
    pub code_font: String,
    pub quote_color: String,
    pub quote_indent: u32,
    pub rule_char: char,
    pub rule_length: usize,
    pub rule_color: String,
    pub paragraph_spacing_after: u32,
    pub list_spacing_after: u32,
    pub heading1_spacing_before: u32,
    pub heading_spacing_before: u32,
    pub heading_spacing_after: u32,
    pub toc_indent_step: u32,
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    pub project_name: String,
    pub procurement_unit: String,
    pub service_period: String,
    pub service_location: String,
    pub generated_on: String,
    pub toc_title: String,
}

impl From<&DocxConfig> for DocxStyle {
    fn from(config: &DocxConfig) -> Self {
        let labels = &config.labels;
        DocxStyle {
            body_size: config.body_size,
            code_size: config.code_size,
            code_font: config.code_font.clone(),
            quote_color: config.quote_color.clone(),
            quote_indent: config.quote_indent,
            rule_char: config.rule_char,
            rule_length: config.rule_length,
            rule_color: config.rule_color.clone(),
            paragraph_spacing_after: config.paragraph_spacing_after,
            list_spacing_after: config.list_spacing_after,
            heading1_spacing_before: config.heading1_spacing_before,
            heading_spacing_before: config.heading_spacing_before,
            heading_spacing_after: config.heading_spacing_after,
            toc_indent_step: config.toc_indent_step,
            labels: CoverLabels {
                project_name: labels.project_name.clone(),
                procurement_unit: labels.procurement_unit.clone(),
                service_period: labels.service_period.clone(),
                service_location: labels.service_location.clone(),
                generated_on: labels.generated_on.clone(),
                toc_title: labels.toc_title.clone(),
                ..CoverLabels::default()
            },
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ProcdocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<ProcdocConfig, ConfigError> {
    Loader::new().build()
}

//! Input shapes handed over by the wizard: chapters and project metadata.

use crate::error::FormatError;
use serde::Deserialize;

/// One chapter record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Chapter {
    #[serde(alias = "templentChapterId", alias = "chapterId")]
    pub id: i64,
    #[serde(default, alias = "chapterContent", alias = "text")]
    pub content: Option<String>,
}

impl Chapter {
    pub fn new(id: i64, content: impl Into<String>) -> Self {
        Chapter {
            id,
            content: Some(content.into()),
        }
    }
}

/// Ordered chapter collection forming one logical Markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SourceDocument {
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl SourceDocument {
    pub fn new(chapters: Vec<Chapter>) -> Self {
        SourceDocument { chapters }
    }

    /// Parse a source document from JSON. Accepts either an object with a
    /// `chapters` array or a bare array of chapters.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            let chapters: Vec<Chapter> = serde_json::from_value(value)?;
            Ok(SourceDocument { chapters })
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    /// Concatenate chapters in ascending id order, newline-joined.
    ///
    /// Chapters sharing an id keep their relative order. Missing content
    /// contributes an empty line.
    pub fn to_markdown(&self) -> String {
        let mut ordered: Vec<&Chapter> = self.chapters.iter().collect();
        ordered.sort_by_key(|chapter| chapter.id);
        ordered
            .iter()
            .map(|chapter| chapter.content.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Project metadata shown on the cover page. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub procurement_unit: Option<String>,
    #[serde(default)]
    pub service_period: Option<String>,
    #[serde(default)]
    pub service_location: Option<String>,
}

impl ProjectInfo {
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Project name if present and not blank.
    pub fn project_name(&self) -> Option<&str> {
        non_blank(self.project_name.as_deref())
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

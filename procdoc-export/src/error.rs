//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while reading the source document or project info
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error while packing or writing the output document
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// Error writing the published artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for FormatError {
    fn from(err: zip::result::ZipError) -> Self {
        FormatError::SerializationError(format!("zip: {err}"))
    }
}

impl From<quick_xml::Error> for FormatError {
    fn from(err: quick_xml::Error) -> Self {
        FormatError::SerializationError(format!("xml: {err}"))
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::ParseError(err.to_string())
    }
}

impl FormatError {
    /// Fold any failure raised while packing a document into a single
    /// serialization error, keeping the original message.
    pub fn into_serialization(self) -> Self {
        match self {
            FormatError::SerializationError(_) => self,
            other => FormatError::SerializationError(other.to_string()),
        }
    }
}

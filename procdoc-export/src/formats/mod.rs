//! Format implementations
//!
//! Markdown is the single input format; everything else is an output format
//! rendering an [`ExportRequest`](crate::format::ExportRequest).

pub mod doc;
pub mod docx;
pub mod html;
pub mod markdown;
pub mod text;

pub use doc::WordHtmlFormat;
pub use docx::{DocxFormat, DocxStyle};
pub use html::{HtmlFormat, HtmlOptions};
pub use markdown::MarkdownOptions;
pub use text::TextFormat;

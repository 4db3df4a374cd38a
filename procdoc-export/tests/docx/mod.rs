//! DOCX export tests
//!
//! End-to-end runs from Markdown to a packaged `.docx`, inspected both through
//! the document model and by reopening the archive.

mod anchors;
mod package;
mod paragraphs;
mod tables;

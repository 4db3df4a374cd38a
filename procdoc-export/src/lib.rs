//! Markdown-to-Word export for procurement documents
//!
//!     This crate turns the chapters a procurement wizard collects (Markdown text plus a few
//!     project fields) into a Word document with a cover page, a hyperlinked table of contents
//!     and the formatted body. HTML and plain-text renderings of the same source are provided
//!     for previews.
//!
//!     This is a pure lib, that is, it powers procdoc-cli but is shell agnostic: no code should
//!     be written that supposes a shell environment, be it printing to std, env vars etc.
//!
//! Architecture
//!
//!     Single direction, leaves first:
//!
//!         Markdown ─► tokenizer ─► Block stream ─► Outline ─► translator ─► WordDocument ─► .docx
//!                     (comrak)     (ir/nodes)      (common)   (formats/docx)               (quick-xml + zip)
//!
//!     The Block stream (./ir/nodes.rs) is the only thing formats see of the source. Logic that
//!     is not tied to one output lives in ./common: the inline formatter splitting block text
//!     into bold/plain runs and line breaks, and the outline numbering headings.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait, ExportRequest
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # Render + name + write
//!     ├── source.rs               # Chapters and project info
//!     ├── formats
//!     │   ├── markdown            # Tokenizer adapter (input)
//!     │   ├── docx                # Translator, front matter, assembler, OOXML writer
//!     │   ├── doc                 # HTML page for Word (.doc)
//!     │   ├── html                # Preview
//!     │   └── text                # Plain-text extraction
//!     ├── lib.rs
//!     ├── ir                      # Block stream and text runs
//!     └── common                  # Inline formatter, outline
//!
//! Testing
//!     tests
//!     └── <area>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Anchors
//!
//!     Every markdown heading gets a bookmark `section<N>`, N counting headings from 1 in source
//!     order. The table of contents links to those bookmarks. Both sides read the numbers from the
//!     same Outline, computed once per export, so the Nth TOC entry always targets the Nth
//!     heading. The generated document title carries its own `title` bookmark outside that
//!     numbering.
//!
//! Library Choices
//!
//!     We never write a Markdown parser: comrak does the parsing and the HTML preview. The DOCX
//!     package is written with quick-xml events and zipped with the zip crate, as there is no
//!     maintained DOCX writer supporting internal hyperlinks.
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;
pub mod source;

pub mod common;
pub mod ir;

pub use error::FormatError;
pub use format::{ExportRequest, Format, SerializedDocument};
pub use formats::docx::FrontMatter;
pub use registry::FormatRegistry;
pub use source::{Chapter, ProjectInfo, SourceDocument};

use std::collections::HashMap;

/// Render Markdown and project info to `.docx` bytes with the default style.
///
/// The generation date is today's local date.
pub fn export_markdown_to_word(
    markdown: &str,
    info: &ProjectInfo,
) -> Result<Vec<u8>, FormatError> {
    let request = ExportRequest::new(markdown).with_project_info(info.clone());
    FormatRegistry::with_defaults()
        .render(&request, "docx", &HashMap::new())
        .map(SerializedDocument::into_bytes)
}

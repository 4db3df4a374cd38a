//! HTML, Word-HTML and plain-text preview tests

mod doc;
mod html;
mod text;

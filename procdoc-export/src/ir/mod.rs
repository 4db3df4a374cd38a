//! Intermediate Representation (IR) for Markdown sources.
//!
//! The tokenizer adapter in [`crate::formats::markdown`] lowers the Markdown
//! AST into a flat stream of [`nodes::Block`] values. Every export format
//! consumes that stream, so format code never touches the parser directly.

pub mod nodes;

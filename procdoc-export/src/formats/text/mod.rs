//! Plain-text extraction
//!
//! One entry per block, newline-joined. Used for word counts and search
//! indexing, so bold markers are stripped and rules contribute nothing.
//!
//! | Block        | Output                                     |
//! |--------------|--------------------------------------------|
//! | Heading      | heading text                               |
//! | Paragraph    | paragraph text                             |
//! | Table        | header and each row joined with ` \| `     |
//! | List         | one entry per item                         |
//! | Code         | code text                                  |
//! | Blockquote   | quote text                                 |
//! | Rule         | nothing                                    |
//! | Other        | its text, if any                           |

use crate::common::inline::strip_inline_markers;
use crate::error::FormatError;
use crate::format::{ExportRequest, Format};
use crate::ir::nodes::Block;

const CELL_SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text extracted from the Markdown source"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn serialize(&self, request: &ExportRequest) -> Result<String, FormatError> {
        Ok(blocks_to_text(&request.blocks()))
    }
}

/// Flatten blocks to plain text.
pub fn blocks_to_text(blocks: &[Block]) -> String {
    let mut parts: Vec<String> = Vec::new();

    for block in blocks {
        match block {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::Blockquote { text } => parts.push(strip_inline_markers(text)),
            Block::Code { text } => parts.push(text.clone()),
            Block::Other { text: Some(text) } => parts.push(strip_inline_markers(text)),
            Block::Table(table) => {
                if !table.header.is_empty() {
                    parts.push(join_cells(&table.header));
                }
                parts.extend(table.rows.iter().map(|row| join_cells(row)));
            }
            Block::List { items, .. } => {
                parts.extend(items.iter().map(|item| strip_inline_markers(item)));
            }
            Block::Rule | Block::Other { text: None } => {}
        }
    }

    parts.join("\n")
}

fn join_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| strip_inline_markers(cell))
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

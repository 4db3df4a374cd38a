//! Markdown input
//!
//! Markdown is the only source format: chapters are authored in Markdown and
//! every export starts by tokenizing the concatenated text.
//!
//! # Library Choice
//!
//! We use the `comrak` crate for Markdown parsing (and for the HTML preview).
//! It is CommonMark compliant and supports the GFM extensions the editors
//! emit (tables, strikethrough, autolinks, task lists).
//!
//! # Block Mapping Table
//!
//! | Markdown                 | Block                     | Notes                                   |
//! |--------------------------|---------------------------|-----------------------------------------|
//! | Heading (# .. ######)    | `Heading { depth, text }` | Depth taken from the ATX/setext level   |
//! | Paragraph                | `Paragraph { text }`      | Soft breaks → `\n` when `breaks` is on  |
//! | List / Item              | `List { ordered, items }` | Nested items follow their parent item   |
//! | Table (GFM)              | `Table(TableBlock)`       | First header row, then body rows        |
//! | Code block               | `Code { text }`           | Info string dropped                     |
//! | Block quote              | `Blockquote { text }`     | Child blocks joined by `\n`             |
//! | Thematic break           | `Rule`                    |                                         |
//! | HTML block               | `Other { text }`          | Raw HTML kept as text                   |
//! | Anything else            | `Other { text: None }`    | Dropped by every format                 |
//! | Inline: Strong           | `**…**`                   | Resolved by the inline formatter        |
//! | Inline: Emph, Link, Code | visible text              | No italic/link styling in the output    |

pub mod parser;

pub use parser::{tokenize, MarkdownOptions};

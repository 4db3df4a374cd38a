//! Markdown tokenizer adapter.
//!
//! Pipeline: Markdown string → Comrak AST → flat `Block` stream.
//!
//! Text-bearing blocks keep bold spans as `**…**` so the inline formatter can
//! split them into runs later. Only the outermost strong node writes markers;
//! strong nodes nested inside it contribute their text. Literal `*`, `_` and
//! `\` copied from text, code and HTML are backslash-escaped so they never
//! pair up as markers. Emphasis, strikethrough, links and inline code are
//! flattened to their visible text.

use crate::common::inline::escape_inline_markers;
use crate::ir::nodes::{Block, TableBlock};
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, Options};
use tracing::{debug, trace};

/// Tokenizer switches, passed explicitly to every parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// GitHub Flavored Markdown: tables, strikethrough, autolinks, task lists.
    pub gfm: bool,
    /// Treat single newlines inside a paragraph as hard breaks.
    pub breaks: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            gfm: true,
            breaks: true,
        }
    }
}

impl MarkdownOptions {
    pub(crate) fn comrak_options(&self) -> Options<'static> {
        let mut options = Options::default();
        options.extension.table = self.gfm;
        options.extension.strikethrough = self.gfm;
        options.extension.autolink = self.gfm;
        options.extension.tasklist = self.gfm;
        options.render.hardbreaks = self.breaks;
        options
    }
}

/// Parse Markdown into the ordered block stream.
pub fn tokenize(source: &str, options: &MarkdownOptions) -> Vec<Block> {
    let arena = Arena::new();
    let comrak_options = options.comrak_options();
    let root = parse_document(&arena, source, &comrak_options);

    let mut blocks = Vec::new();
    for child in root.children() {
        collect_block(child, options, &mut blocks);
    }

    debug!(blocks = blocks.len(), "tokenized markdown source");
    blocks
}

fn collect_block<'a>(node: &'a AstNode<'a>, options: &MarkdownOptions, blocks: &mut Vec<Block>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Heading(heading) => {
            blocks.push(Block::Heading {
                depth: heading.level as usize,
                text: inline_text(node, options),
            });
        }

        NodeValue::Paragraph => {
            blocks.push(Block::Paragraph {
                text: inline_text(node, options),
            });
        }

        NodeValue::List(list) => {
            let ordered = matches!(list.list_type, ListType::Ordered);
            let mut items = Vec::new();
            collect_list_items(node, options, &mut items);
            blocks.push(Block::List { ordered, items });
        }

        NodeValue::CodeBlock(code_block) => {
            let literal = code_block.literal.as_str();
            let text = literal.strip_suffix('\n').unwrap_or(literal);
            blocks.push(Block::Code {
                text: text.to_string(),
            });
        }

        NodeValue::BlockQuote => {
            blocks.push(Block::Blockquote {
                text: container_text(node, options),
            });
        }

        NodeValue::ThematicBreak => blocks.push(Block::Rule),

        NodeValue::Table(_) => blocks.push(Block::Table(collect_table(node, options))),

        NodeValue::HtmlBlock(html) => {
            let text = html.literal.trim_end();
            blocks.push(Block::Other {
                text: (!text.is_empty()).then(|| escape_inline_markers(text)),
            });
        }

        other => {
            trace!(node = ?other, "no block mapping, skipping");
            blocks.push(Block::Other { text: None });
        }
    }
}

/// Items of a list, with nested list items following their parent item.
fn collect_list_items<'a>(list: &'a AstNode<'a>, options: &MarkdownOptions, items: &mut Vec<String>) {
    for item in list.children() {
        let mut parts = Vec::new();
        let mut nested = Vec::new();
        for child in item.children() {
            if matches!(child.data.borrow().value, NodeValue::List(_)) {
                nested.push(child);
            } else if let Some(text) = block_text(child, options) {
                parts.push(text);
            }
        }
        items.push(parts.join("\n"));
        for sublist in nested {
            collect_list_items(sublist, options, items);
        }
    }
}

fn collect_table<'a>(table: &'a AstNode<'a>, options: &MarkdownOptions) -> TableBlock {
    let mut block = TableBlock::default();
    for row in table.children() {
        let is_header = matches!(row.data.borrow().value, NodeValue::TableRow(true));
        let cells: Vec<String> = row
            .children()
            .map(|cell| inline_text(cell, options))
            .collect();
        if is_header && block.header.is_empty() {
            block.header = cells;
        } else {
            block.rows.push(cells);
        }
    }
    block
}

/// Text of a container block (blockquote), one line per child block.
fn container_text<'a>(node: &'a AstNode<'a>, options: &MarkdownOptions) -> String {
    node.children()
        .filter_map(|child| block_text(child, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn block_text<'a>(node: &'a AstNode<'a>, options: &MarkdownOptions) -> Option<String> {
    let node_data = node.data.borrow();
    match &node_data.value {
        NodeValue::Paragraph | NodeValue::Heading(_) => Some(inline_text(node, options)),
        NodeValue::CodeBlock(code_block) => {
            Some(escape_inline_markers(code_block.literal.trim_end()))
        }
        NodeValue::BlockQuote => Some(container_text(node, options)),
        NodeValue::List(_) => {
            let mut items = Vec::new();
            collect_list_items(node, options, &mut items);
            Some(items.join("\n"))
        }
        NodeValue::HtmlBlock(html) => Some(escape_inline_markers(html.literal.trim_end())),
        _ => None,
    }
}

/// Visible text of a node's inline children, bold spans marked with `**`.
fn inline_text<'a>(node: &'a AstNode<'a>, options: &MarkdownOptions) -> String {
    let mut out = String::new();
    for child in node.children() {
        push_inline(child, options, false, &mut out);
    }
    out
}

fn push_inline<'a>(
    node: &'a AstNode<'a>,
    options: &MarkdownOptions,
    in_strong: bool,
    out: &mut String,
) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => out.push_str(&escape_inline_markers(text)),
        NodeValue::SoftBreak => out.push(if options.breaks { '\n' } else { ' ' }),
        NodeValue::LineBreak => out.push('\n'),
        NodeValue::Code(code) => out.push_str(&escape_inline_markers(&code.literal)),
        NodeValue::HtmlInline(html) => out.push_str(&escape_inline_markers(html)),
        NodeValue::Strong if !in_strong => {
            out.push_str("**");
            for child in node.children() {
                push_inline(child, options, true, out);
            }
            out.push_str("**");
        }
        NodeValue::Link(link) => {
            let start = out.len();
            for child in node.children() {
                push_inline(child, options, in_strong, out);
            }
            if out.len() == start {
                out.push_str(&escape_inline_markers(&link.url));
            }
        }
        _ => {
            for child in node.children() {
                push_inline(child, options, in_strong, out);
            }
        }
    }
}

//! Heading outline shared by the table of contents and the body.
//!
//! The outline walks the block stream once and hands every heading its
//! anchor. Both the TOC builder and the block translator read anchors from
//! here, so the Nth TOC entry and the Nth heading bookmark always agree.

use crate::common::inline::strip_inline_markers;
use crate::ir::nodes::Block;
use std::collections::HashMap;

/// Prefix of every section bookmark name (`section1`, `section2`, ...).
pub const BOOKMARK_PREFIX: &str = "section";

/// Bookmark carried by the generated document title. It sits outside the
/// section numbering.
pub const TITLE_BOOKMARK: &str = "title";

/// Sequential anchor assigned to a heading, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor(pub u32);

impl Anchor {
    /// The bookmark name used both for the heading and the TOC link target.
    pub fn bookmark_name(self) -> String {
        format!("{BOOKMARK_PREFIX}{}", self.0)
    }
}

/// One heading as listed in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub anchor: Anchor,
    /// Heading level, already clamped to `1..=6`.
    pub depth: usize,
    /// Heading text with inline markers removed.
    pub text: String,
    /// Position of the heading in the block stream.
    pub block_index: usize,
}

/// Ordered list of headings plus a block-index lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
    by_block: HashMap<usize, usize>,
}

impl Outline {
    /// Collect every heading of `blocks` in source order.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut outline = Outline::default();
        for (block_index, block) in blocks.iter().enumerate() {
            if let Block::Heading { depth, text } = block {
                let anchor = Anchor(outline.entries.len() as u32 + 1);
                outline.by_block.insert(block_index, outline.entries.len());
                outline.entries.push(OutlineEntry {
                    anchor,
                    depth: clamp_heading_depth(*depth),
                    text: strip_inline_markers(text),
                    block_index,
                });
            }
        }
        outline
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anchor of the heading at `block_index`, if that block is a heading.
    pub fn anchor_for_block(&self, block_index: usize) -> Option<Anchor> {
        self.by_block
            .get(&block_index)
            .map(|&entry| self.entries[entry].anchor)
    }
}

/// Heading levels outside `1..=6` fall back to level 1.
pub fn clamp_heading_depth(depth: usize) -> usize {
    if (1..=6).contains(&depth) {
        depth
    } else {
        1
    }
}

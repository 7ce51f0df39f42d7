use std::rc::Rc;

use crate::blocks::{Block, BlockList};
use crate::text::Span;

/// Marker widget drawn in place of a delimiter.
///
/// Stateless, so every instance is equal to every other and swapping one
/// for another never forces a redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BlockStartWidget;

impl BlockStartWidget {
    pub const CLASS: &'static str = "block-start";

    /// The widget lets clicks and keys through to the editor.
    pub fn ignore_event(&self) -> bool {
        false
    }

    /// Rendered height in rows. The widget draws a rule, not a text line.
    pub fn height(&self) -> u16 {
        0
    }
}

/// Block-level replacement of a delimiter's visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    pub range: Span,
    pub widget: BlockStartWidget,
    pub block: bool,
    pub inclusive: bool,
    pub side: i8,
}

impl Decoration {
    /// Replacement for one block's delimiter.
    ///
    /// The delimiter's leading and trailing newlines stay visible so lines
    /// around it keep their breaks. The first delimiter has no line before it
    /// and is replaced from offset 0.
    pub fn for_block(block: &Block) -> Self {
        let delimiter = block.delimiter;
        let start = if delimiter.start == 0 {
            0
        } else {
            delimiter.start + 1
        };
        let end = delimiter.end.saturating_sub(1).max(start);

        Self {
            range: Span::new(start, end),
            widget: BlockStartWidget,
            block: true,
            inclusive: true,
            side: 0,
        }
    }
}

/// Decorations for the current block list, rebuilt only when the list changes.
#[derive(Debug, Clone)]
pub struct DelimiterDecorations {
    source: BlockList,
    decorations: Rc<[Decoration]>,
}

impl DelimiterDecorations {
    pub fn new(blocks: &BlockList) -> Self {
        Self {
            source: blocks.clone(),
            decorations: blocks.iter().map(Decoration::for_block).collect(),
        }
    }

    /// Re-derive for `blocks`. Returns whether the decorations changed.
    ///
    /// An identical block list is a no-op. A new list whose ranges come out
    /// the same keeps the previous allocation.
    pub fn update(&mut self, blocks: &BlockList) -> bool {
        if self.source.ptr_eq(blocks) {
            return false;
        }
        self.source = blocks.clone();

        let next: Rc<[Decoration]> = blocks.iter().map(Decoration::for_block).collect();
        if next == self.decorations {
            return false;
        }
        self.decorations = next;
        true
    }

    pub fn decorations(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Shared handle to the current set, for identity checks by the host.
    pub fn shared(&self) -> Rc<[Decoration]> {
        Rc::clone(&self.decorations)
    }
}

use std::ops::Deref;
use std::rc::Rc;

use crate::text::Span;

/// One note block: the delimiter that introduces it and the body after it.
///
/// `delimiter.end == content.start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub delimiter: Span,
    pub content: Span,
}

impl Block {
    pub fn new(delimiter: Span, content: Span) -> Self {
        debug_assert_eq!(delimiter.end, content.start, "content must follow delimiter");
        Self { delimiter, content }
    }

    /// Whole extent of the block, delimiter included.
    pub fn span(&self) -> Span {
        Span::new(self.delimiter.start, self.content.end)
    }
}

/// Immutable, ordered list of blocks produced by one index computation.
///
/// Cloning shares the underlying slice. Consumers decide whether they need to
/// recompute by comparing identity with [`BlockList::ptr_eq`], never by
/// diffing. `==` is structural and exists for tests and memoization.
#[derive(Debug, Clone)]
pub struct BlockList(Rc<[Block]>);

impl BlockList {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self(blocks.into())
    }

    pub fn empty() -> Self {
        Self(Rc::from([]))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// End of the first block's delimiter, if there is a first block.
    pub fn protected_prefix(&self) -> Option<usize> {
        self.0.first().map(|block| block.delimiter.end)
    }

    /// The block whose content contains `offset`, inclusive of the content end.
    ///
    /// When two candidates touch (an empty content ending where the next
    /// delimiter starts) the earlier block wins.
    pub fn content_at(&self, offset: usize) -> Option<(usize, &Block)> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, block)| block.content.contains_inclusive(offset))
    }
}

impl Default for BlockList {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for BlockList {
    type Target = [Block];

    fn deref(&self) -> &[Block] {
        &self.0
    }
}

impl PartialEq for BlockList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0[..] == other.0[..]
    }
}

impl Eq for BlockList {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(delimiter: std::ops::Range<usize>, content: std::ops::Range<usize>) -> Block {
        Block::new(delimiter.into(), content.into())
    }

    fn two_blocks() -> BlockList {
        BlockList::new(vec![block(0..15, 15..20), block(20..35, 35..38)])
    }

    #[test]
    fn identity_and_structure_are_distinct() {
        let a = two_blocks();
        let b = two_blocks();
        let shared = a.clone();

        assert!(a.ptr_eq(&shared));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn protected_prefix_is_first_delimiter_end() {
        assert_eq!(two_blocks().protected_prefix(), Some(15));
        assert_eq!(BlockList::empty().protected_prefix(), None);
    }

    #[test]
    fn content_at_includes_content_end() {
        let blocks = two_blocks();
        assert_eq!(blocks.content_at(15).map(|(i, _)| i), Some(0));
        assert_eq!(blocks.content_at(20).map(|(i, _)| i), Some(0));
        assert_eq!(blocks.content_at(25).map(|(i, _)| i), None);
        assert_eq!(blocks.content_at(38).map(|(i, _)| i), Some(1));
    }

    #[test]
    fn block_span_covers_delimiter_and_content() {
        assert_eq!(block(20..35, 35..38).span(), Span::new(20, 38));
    }
}

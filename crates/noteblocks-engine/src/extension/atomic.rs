use std::rc::Rc;

use crate::blocks::Block;
use crate::text::Span;

/// Delimiter spans that the cursor and single-character deletes treat as
/// one unit.
///
/// Sorted by start; exactly one range per block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomicRanges(Rc<[Span]>);

impl AtomicRanges {
    pub fn from_blocks(blocks: &[Block]) -> Self {
        Self(blocks.iter().map(|block| block.delimiter).collect())
    }

    pub fn ranges(&self) -> &[Span] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The range `pos` falls strictly inside, if any.
    pub fn enclosing(&self, pos: usize) -> Option<Span> {
        let idx = self.0.partition_point(|range| range.end <= pos);
        self.0
            .get(idx)
            .copied()
            .filter(|range| range.contains_strictly(pos))
    }

    /// Move a cursor that landed inside a range to the range's far edge.
    pub fn skip(&self, pos: usize, forward: bool) -> usize {
        match self.enclosing(pos) {
            Some(range) if forward => range.end,
            Some(range) => range.start,
            None => pos,
        }
    }

    /// Widen a deletion so it never removes part of a range.
    pub fn widen(&self, deletion: Span) -> Span {
        self.0
            .iter()
            .filter(|range| range.overlaps(deletion))
            .fold(deletion, |acc, range| acc.cover(*range))
    }
}

//! The note-blocks extension bundle.
//!
//! [`NoteBlocks`] owns the block state and every consumer derived from it:
//! delimiter decorations, atomic ranges, the background layer, the
//! structural guard filters and the relative line-number gutter. The editor
//! installs it once and drives it through [`NoteBlocks::filter`] before a
//! transaction is applied and [`NoteBlocks::update`] after.

pub mod atomic;
pub mod decorations;
pub mod guard;
pub mod gutter;
pub mod layer;

pub use atomic::AtomicRanges;
pub use decorations::{BlockStartWidget, Decoration, DelimiterDecorations};
pub use guard::{ChangeVeto, SelectionClamp, TransactionFilter, clamp_selection, veto_changes};
pub use gutter::format_line_number;
pub use layer::{BandClass, BlockLayer, Coords, LayerView, RectangleMarker, block_markers};

use crate::blocks::{BlockList, BlockState, IndexError};
use crate::editing::Document;
use crate::editing::transaction::Transaction;

/// What changed in one update cycle, as seen by view-dependent consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewUpdate {
    pub doc_changed: bool,
    pub viewport_changed: bool,
    pub geometry_changed: bool,
}

pub struct NoteBlocks {
    state: BlockState,
    decorations: DelimiterDecorations,
    atomic: AtomicRanges,
    layer: BlockLayer,
    filters: Vec<Box<dyn TransactionFilter>>,
}

impl NoteBlocks {
    pub fn new(doc: &Document) -> Self {
        let state = BlockState::create(doc);
        let decorations = DelimiterDecorations::new(state.blocks());
        let atomic = AtomicRanges::from_blocks(state.blocks());

        Self {
            state,
            decorations,
            atomic,
            layer: BlockLayer::default(),
            filters: vec![Box::new(ChangeVeto), Box::new(SelectionClamp)],
        }
    }

    /// Run the filter chain over a proposed transaction.
    pub fn filter(&self, tr: Transaction) -> Transaction {
        let prefix = self.state.protected_prefix();
        self.filters
            .iter()
            .fold(tr, |tr, filter| filter.filter(tr, prefix))
    }

    /// Bring derived state up to date after a transaction was applied.
    ///
    /// Returns whether the block list was recomputed.
    pub fn update(&mut self, doc_changed: bool, doc: &Document) -> bool {
        if !self.state.update(doc_changed, doc) {
            return false;
        }
        self.decorations.update(self.state.blocks());
        self.atomic = AtomicRanges::from_blocks(self.state.blocks());
        true
    }

    /// Redraw the background layer if the update calls for it.
    pub fn update_layer(&mut self, update: &ViewUpdate, view: &dyn LayerView) -> bool {
        self.layer.update(update, self.state.blocks(), view)
    }

    pub fn blocks(&self) -> &BlockList {
        self.state.blocks()
    }

    pub fn protected_prefix(&self) -> Option<usize> {
        self.state.protected_prefix()
    }

    pub fn last_error(&self) -> Option<&IndexError> {
        self.state.last_error()
    }

    pub fn decorations(&self) -> &[Decoration] {
        self.decorations.decorations()
    }

    pub fn atomic_ranges(&self) -> &AtomicRanges {
        &self.atomic
    }

    pub fn layer_markers(&self) -> &[RectangleMarker] {
        self.layer.markers()
    }

    pub fn line_number(&self, line_no: usize, doc: &Document) -> String {
        format_line_number(line_no, doc, self.state.blocks())
    }
}

impl std::fmt::Debug for NoteBlocks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters: Vec<_> = self.filters.iter().map(|filter| filter.name()).collect();
        f.debug_struct("NoteBlocks")
            .field("blocks", self.state.blocks())
            .field("protected_prefix", &self.state.protected_prefix())
            .field("filters", &filters)
            .finish()
    }
}

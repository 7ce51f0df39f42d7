use crate::blocks::indexer::{self, IndexError};
use crate::blocks::types::BlockList;
use crate::editing::Document;

/// Cached block list plus the protected-prefix length derived from it.
///
/// Both are recomputed together, only when document content changes. The
/// prefix is unset until the first non-empty index and is left stale when a
/// later computation yields no blocks.
#[derive(Debug, Clone)]
pub struct BlockState {
    blocks: BlockList,
    protected_prefix: Option<usize>,
    last_error: Option<IndexError>,
}

impl BlockState {
    pub fn create(doc: &Document) -> Self {
        let mut state = Self {
            blocks: BlockList::empty(),
            protected_prefix: None,
            last_error: None,
        };
        state.recompute(doc);
        state
    }

    /// Recompute if the transaction changed the document.
    ///
    /// Returns whether a new block list was published. When it returns false
    /// the previous list is kept as the same allocation.
    pub fn update(&mut self, doc_changed: bool, doc: &Document) -> bool {
        if !doc_changed {
            return false;
        }
        self.recompute(doc);
        true
    }

    pub fn blocks(&self) -> &BlockList {
        &self.blocks
    }

    pub fn protected_prefix(&self) -> Option<usize> {
        self.protected_prefix
    }

    /// Error from the most recent computation, if it failed.
    pub fn last_error(&self) -> Option<&IndexError> {
        self.last_error.as_ref()
    }

    fn recompute(&mut self, doc: &Document) {
        match indexer::index(doc) {
            Ok(blocks) => {
                log::debug!(
                    "indexed {} blocks at version {}",
                    blocks.len(),
                    doc.version()
                );
                self.blocks = blocks;
                self.last_error = None;
            }
            Err(err) => {
                log::warn!("block indexing failed at version {}: {err}", doc.version());
                self.blocks = BlockList::empty();
                self.last_error = Some(err);
            }
        }

        if let Some(prefix) = self.blocks.protected_prefix() {
            self.protected_prefix = Some(prefix);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::transaction::ChangeSet;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\n∞∞∞text\nhello\n∞∞∞json\n{}\n";

    #[test]
    fn create_indexes_initial_document() {
        let state = BlockState::create(&Document::from_text(SAMPLE));
        assert_eq!(state.blocks().len(), 2);
        assert_eq!(state.protected_prefix(), Some(15));
        assert!(state.last_error().is_none());
    }

    #[test]
    fn prefix_is_unset_without_blocks() {
        let state = BlockState::create(&Document::from_text("no notes here"));
        assert!(state.blocks().is_empty());
        assert_eq!(state.protected_prefix(), None);
    }

    #[test]
    fn selection_only_update_keeps_identity() {
        let doc = Document::from_text(SAMPLE);
        let mut state = BlockState::create(&doc);
        let before = state.blocks().clone();

        assert!(!state.update(false, &doc));
        assert!(state.blocks().ptr_eq(&before));
    }

    #[test]
    fn content_change_recomputes() {
        let mut doc = Document::from_text(SAMPLE);
        let mut state = BlockState::create(&doc);
        let before = state.blocks().clone();

        doc.apply_changes(&ChangeSet::insert(20, " world"), None);
        assert!(state.update(true, &doc));

        assert!(!state.blocks().ptr_eq(&before));
        assert_eq!(state.blocks()[0].content.end, 26);
        assert_eq!(state.blocks()[1].delimiter.start, 26);
    }

    #[test]
    fn prefix_goes_stale_when_blocks_vanish() {
        let mut doc = Document::from_text(SAMPLE);
        let mut state = BlockState::create(&doc);

        let len = doc.len();
        doc.apply_changes(&ChangeSet::replace(0..len, "plain"), None);
        state.update(true, &doc);

        assert!(state.blocks().is_empty());
        assert_eq!(state.protected_prefix(), Some(15));
    }

    #[test]
    fn prefix_follows_first_delimiter() {
        let mut doc = Document::from_text(SAMPLE);
        let mut state = BlockState::create(&doc);

        doc.apply_changes(&ChangeSet::replace(10..14, "markdown"), None);
        state.update(true, &doc);

        assert_eq!(state.protected_prefix(), Some(19));
    }
}

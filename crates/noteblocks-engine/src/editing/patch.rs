use crate::editing::transaction::Selection;

/// Result of applying a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Inserted ranges, in new-document offsets
    pub changed: Vec<std::ops::Range<usize>>,
    pub new_selection: Selection,
    pub version: u64,
    /// Whether the document content changed (false when a filter dropped every change)
    pub doc_changed: bool,
}

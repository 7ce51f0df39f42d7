use std::ops::Range;

use xi_rope::delta::{Builder, Transformer};
use xi_rope::{Delta, Rope, RopeInfo};

/// One replacement: delete `range` (old-document offsets) and insert `insert`
/// at its start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub range: Range<usize>,
    pub insert: String,
}

impl Change {
    pub fn new(range: Range<usize>, insert: impl Into<String>) -> Self {
        Self {
            range,
            insert: insert.into(),
        }
    }

    /// A change that neither deletes nor inserts anything.
    pub fn is_noop(&self) -> bool {
        self.range.is_empty() && self.insert.is_empty()
    }
}

/// Sorted, non-overlapping list of changes against one document version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from arbitrary changes. No-ops are dropped and the rest sorted.
    pub fn from_changes(changes: impl IntoIterator<Item = Change>) -> Self {
        let mut changes: Vec<Change> = changes.into_iter().filter(|c| !c.is_noop()).collect();
        changes.sort_by_key(|c| (c.range.start, c.range.end));
        debug_assert!(
            changes
                .windows(2)
                .all(|pair| pair[0].range.end <= pair[1].range.start),
            "overlapping changes: {changes:?}"
        );
        Self { changes }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::from_changes([Change::new(at..at, text)])
    }

    pub fn delete(range: Range<usize>) -> Self {
        Self::from_changes([Change::new(range, "")])
    }

    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self::from_changes([Change::new(range, text)])
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Compile into an xi-rope delta over a document of `base_len` bytes.
    pub fn to_delta(&self, base_len: usize) -> Delta<RopeInfo> {
        let mut builder = Builder::new(base_len);
        for change in &self.changes {
            let start = change.range.start.min(base_len);
            let end = change.range.end.min(base_len).max(start);
            if change.insert.is_empty() {
                builder.delete(start..end);
            } else {
                builder.replace(start..end, Rope::from(change.insert.as_str()));
            }
        }
        builder.build()
    }
}

/// Map an old-document offset through a delta.
///
/// `after` decides which side of an insertion at exactly `offset` the result
/// lands on.
pub fn map_offset(delta: &Delta<RopeInfo>, offset: usize, after: bool) -> usize {
    Transformer::new(delta).transform(offset, after)
}

/// A selection range. `anchor` stays put while extending; `head` moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn cursor(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn range(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn is_cursor(&self) -> bool {
        self.anchor == self.head
    }

    /// Apply `f` to both endpoints independently.
    pub fn map(self, mut f: impl FnMut(usize) -> usize) -> Self {
        Self {
            anchor: f(self.anchor),
            head: f(self.head),
        }
    }
}

/// Metadata attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Full document load or reset. Structural guards let these through.
    InitialData,
    /// The user action that produced the transaction, e.g. `"input"`.
    UserEvent(&'static str),
}

/// A proposed update: document changes, an optional explicit selection and
/// annotations.
///
/// When `selection` is `None` the current selection is mapped through the
/// changes instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub changes: ChangeSet,
    pub selection: Option<Selection>,
    pub annotations: Vec<Annotation>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_changes(mut self, changes: ChangeSet) -> Self {
        self.changes = changes;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn doc_changed(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn is_initial_data(&self) -> bool {
        self.annotations.contains(&Annotation::InitialData)
    }

    pub fn user_event(&self) -> Option<&'static str> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::UserEvent(event) => Some(*event),
            Annotation::InitialData => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn from_changes_sorts_and_drops_noops() {
        let set = ChangeSet::from_changes([
            Change::new(8..9, "b"),
            Change::new(3..3, ""),
            Change::new(1..2, "a"),
        ]);
        assert_eq!(
            set.changes(),
            &[Change::new(1..2, "a"), Change::new(8..9, "b")]
        );
    }

    #[test]
    fn delta_applies_all_changes() {
        let rope = Rope::from("hello world");
        let set = ChangeSet::from_changes([
            Change::new(0..5, "goodbye"),
            Change::new(11..11, "!"),
        ]);
        let result = set.to_delta(rope.len()).apply(&rope);
        assert_eq!(result.to_string(), "goodbye world!");
    }

    #[test]
    fn map_offset_respects_insertion_side() {
        let delta = ChangeSet::insert(3, "xyz").to_delta(10);
        assert_eq!(map_offset(&delta, 3, false), 3);
        assert_eq!(map_offset(&delta, 3, true), 6);
        assert_eq!(map_offset(&delta, 5, true), 8);
    }

    #[test]
    fn map_offset_collapses_deleted_range() {
        let delta = ChangeSet::delete(2..6).to_delta(10);
        assert_eq!(map_offset(&delta, 4, true), 2);
        assert_eq!(map_offset(&delta, 8, true), 4);
    }

    #[test]
    fn selection_endpoints() {
        let sel = Selection::range(9, 3);
        assert_eq!((sel.from(), sel.to()), (3, 9));
        assert!(!sel.is_cursor());
        assert!(Selection::cursor(4).is_cursor());
    }

    #[test]
    fn transaction_annotations() {
        let tr = Transaction::new()
            .with_changes(ChangeSet::insert(0, "x"))
            .annotate(Annotation::InitialData)
            .annotate(Annotation::UserEvent("input"));
        assert!(tr.doc_changed());
        assert!(tr.is_initial_data());
        assert_eq!(tr.user_event(), Some("input"));
        assert!(!Transaction::new().doc_changed());
    }
}

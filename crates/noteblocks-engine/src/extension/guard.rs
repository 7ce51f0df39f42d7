//! Structural protection of the first block's delimiter.
//!
//! Both policies take the protected-prefix length `P` explicitly and do
//! nothing while it is unset.

use crate::editing::transaction::{Change, ChangeSet, Selection, Transaction};

/// A step in the editor's transaction middleware chain.
pub trait TransactionFilter {
    fn name(&self) -> &'static str;

    fn filter(&self, tr: Transaction, protected_prefix: Option<usize>) -> Transaction;
}

/// Clip changes so nothing inside `[0, prefix)` is modified.
///
/// A change's deleted span loses its part before `prefix`. A change lying
/// wholly before `prefix`, insertions included, is dropped.
pub fn veto_changes(changes: &ChangeSet, prefix: usize) -> ChangeSet {
    ChangeSet::from_changes(changes.changes().iter().filter_map(|change| {
        let start = change.range.start.max(prefix);
        if start > change.range.end {
            log::trace!("dropping change {:?} before protected prefix {prefix}", change.range);
            return None;
        }
        if start != change.range.start {
            log::trace!(
                "clipping change {:?} to {start}..{}",
                change.range,
                change.range.end
            );
        }
        Some(Change::new(start..change.range.end, change.insert.clone()))
    }))
}

/// Move every selection endpoint before `prefix` up to `prefix`.
pub fn clamp_selection(selection: Selection, prefix: usize) -> Selection {
    selection.map(|endpoint| endpoint.max(prefix))
}

/// Rejects edits to the protected prefix unless the transaction loads a
/// whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeVeto;

impl TransactionFilter for ChangeVeto {
    fn name(&self) -> &'static str {
        "change-veto"
    }

    fn filter(&self, mut tr: Transaction, protected_prefix: Option<usize>) -> Transaction {
        let Some(prefix) = protected_prefix else {
            return tr;
        };
        if tr.is_initial_data() || !tr.doc_changed() {
            return tr;
        }
        tr.changes = veto_changes(&tr.changes, prefix);
        tr
    }
}

/// Keeps explicit selections out of the protected prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionClamp;

impl TransactionFilter for SelectionClamp {
    fn name(&self) -> &'static str {
        "selection-clamp"
    }

    fn filter(&self, mut tr: Transaction, protected_prefix: Option<usize>) -> Transaction {
        if let (Some(selection), Some(prefix)) = (tr.selection, protected_prefix) {
            let clamped = clamp_selection(selection, prefix);
            if clamped != selection {
                log::trace!("clamping selection {selection:?} to {clamped:?}");
            }
            tr.selection = Some(clamped);
        }
        tr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::transaction::Annotation;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::deletion_inside_prefix(Change::new(3..10, ""), None)]
    #[case::insertion_inside_prefix(Change::new(3..3, "x"), None)]
    #[case::insertion_at_prefix(Change::new(15..15, "x"), Some(Change::new(15..15, "x")))]
    #[case::straddling_deletion(Change::new(10..20, ""), Some(Change::new(15..20, "")))]
    #[case::straddling_replace(Change::new(10..20, "y"), Some(Change::new(15..20, "y")))]
    #[case::after_prefix(Change::new(16..18, ""), Some(Change::new(16..18, "")))]
    #[case::exact_prefix_deletion(Change::new(0..15, ""), None)]
    fn veto_clips_to_prefix(#[case] change: Change, #[case] expected: Option<Change>) {
        let vetoed = veto_changes(&ChangeSet::from_changes([change]), 15);
        assert_eq!(vetoed.changes(), expected.as_slice());
    }

    #[rstest]
    #[case(Selection::cursor(0), Selection::cursor(15))]
    #[case(Selection::range(3, 20), Selection::range(15, 20))]
    #[case(Selection::range(20, 3), Selection::range(20, 15))]
    #[case(Selection::range(16, 30), Selection::range(16, 30))]
    fn clamp_moves_endpoints_independently(#[case] selection: Selection, #[case] expected: Selection) {
        assert_eq!(clamp_selection(selection, 15), expected);
    }

    #[test]
    fn initial_data_bypasses_veto() {
        let tr = Transaction::new()
            .with_changes(ChangeSet::replace(0..38, "fresh"))
            .annotate(Annotation::InitialData);
        let filtered = ChangeVeto.filter(tr.clone(), Some(15));
        assert_eq!(filtered, tr);
    }

    #[test]
    fn unset_prefix_is_a_no_op() {
        let tr = Transaction::new()
            .with_changes(ChangeSet::delete(0..5))
            .with_selection(Selection::cursor(0));
        assert_eq!(ChangeVeto.filter(tr.clone(), None), tr);
        assert_eq!(SelectionClamp.filter(tr.clone(), None), tr);
    }

    #[test]
    fn clamp_leaves_mapped_selection_alone() {
        let tr = Transaction::new().with_changes(ChangeSet::insert(20, "x"));
        assert_eq!(SelectionClamp.filter(tr.clone(), Some(15)).selection, None);
    }
}

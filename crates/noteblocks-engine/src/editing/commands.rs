use crate::editing::Document;
use crate::editing::transaction::{Annotation, ChangeSet, Selection, Transaction};
use crate::extension::AtomicRanges;
use crate::text::Span;

/// Commands that can be applied to the editor
///
/// Edits act on the current selection; motions produce an explicit new
/// selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Replace the selection with `text`
    InsertText { text: String },
    DeleteBackward,
    DeleteForward,
    MoveLeft { extend: bool },
    MoveRight { extend: bool },
    MoveUp { extend: bool },
    MoveDown { extend: bool },
    /// Put the cursor at `pos`, e.g. from a mouse click. A position inside a
    /// delimiter lands on its far edge in the direction of travel.
    MoveTo { pos: usize, extend: bool },
    SelectAll,
    /// Replace the whole buffer
    LoadDocument { text: String },
}

/// Compile a command into a transaction against the current document
pub(crate) fn compile_command(doc: &Document, atomic: &AtomicRanges, cmd: &Cmd) -> Transaction {
    let selection = doc.selection();

    match cmd {
        Cmd::InsertText { text } => Transaction::new()
            .with_changes(ChangeSet::replace(selection.from()..selection.to(), text.clone()))
            .annotate(Annotation::UserEvent("input.type")),
        Cmd::DeleteBackward => {
            let range = if selection.is_cursor() {
                let head = selection.head;
                atomic.widen(Span::new(doc.prev_grapheme(head), head))
            } else {
                Span::new(selection.from(), selection.to())
            };
            Transaction::new()
                .with_changes(ChangeSet::delete(range.range()))
                .annotate(Annotation::UserEvent("delete.backward"))
        }
        Cmd::DeleteForward => {
            let range = if selection.is_cursor() {
                let head = selection.head;
                atomic.widen(Span::new(head, doc.next_grapheme(head)))
            } else {
                Span::new(selection.from(), selection.to())
            };
            Transaction::new()
                .with_changes(ChangeSet::delete(range.range()))
                .annotate(Annotation::UserEvent("delete.forward"))
        }
        Cmd::MoveLeft { extend } => {
            let head = if !extend && !selection.is_cursor() {
                selection.from()
            } else {
                atomic.skip(doc.prev_grapheme(selection.head), false)
            };
            motion(selection, head, *extend)
        }
        Cmd::MoveRight { extend } => {
            let head = if !extend && !selection.is_cursor() {
                selection.to()
            } else {
                atomic.skip(doc.next_grapheme(selection.head), true)
            };
            motion(selection, head, *extend)
        }
        Cmd::MoveUp { extend } => {
            let head = vertical_target(doc, selection.head, false);
            motion(selection, atomic.skip(head, false), *extend)
        }
        Cmd::MoveDown { extend } => {
            let head = vertical_target(doc, selection.head, true);
            motion(selection, atomic.skip(head, true), *extend)
        }
        Cmd::MoveTo { pos, extend } => {
            let pos = doc.snap_to_char_boundary(*pos);
            motion(selection, atomic.skip(pos, pos >= selection.head), *extend)
        }
        Cmd::SelectAll => Transaction::new()
            .with_selection(Selection::range(0, doc.len()))
            .annotate(Annotation::UserEvent("select")),
        Cmd::LoadDocument { text } => Transaction::new()
            .with_changes(ChangeSet::replace(0..doc.len(), text.clone()))
            .with_selection(Selection::cursor(text.len()))
            .annotate(Annotation::InitialData)
            .annotate(Annotation::UserEvent("load")),
    }
}

fn motion(selection: Selection, head: usize, extend: bool) -> Transaction {
    let next = if extend {
        Selection::range(selection.anchor, head)
    } else {
        Selection::cursor(head)
    };
    Transaction::new()
        .with_selection(next)
        .annotate(Annotation::UserEvent("select"))
}

/// Offset on the neighbouring line at the same byte column, clamped to that
/// line's length. The first and last lines move to the buffer edges.
fn vertical_target(doc: &Document, head: usize, down: bool) -> usize {
    let line = doc.line_of_offset(head);
    let Some(line_start) = doc.offset_of_line(line) else {
        return head;
    };
    let column = head - line_start;

    let target = if down {
        line + 1
    } else {
        match line.checked_sub(1) {
            Some(target) => target,
            None => return 0,
        }
    };

    match doc.lines().nth(target) {
        Some(target_line) => {
            let mut column = column.min(target_line.text.len());
            while !target_line.text.is_char_boundary(column) {
                column -= 1;
            }
            target_line.span.start + column
        }
        None => doc.len(),
    }
}

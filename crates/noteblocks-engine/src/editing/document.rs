use noteblocks_syntax::SyntaxNode;
use xi_rope::Rope;

use crate::editing::transaction::{ChangeSet, Selection, map_offset};
use crate::text::{LineRef, lines_with_spans};

/// The editable note buffer.
///
/// ## Single Source of Truth
/// - The whole buffer lives in one `xi_rope::Rope`; saving writes its bytes
///   verbatim, so round-trips are exact
/// - Edits arrive as [`ChangeSet`]s and are applied as xi-rope deltas
///
/// ## Syntax Tree
/// - The note-buffer CST is rebuilt from scratch after every change. Block
///   derivation is a wholesale recomputation too, so there is nothing to gain
///   from incremental reparsing here
///
/// ## Selection and Version
/// - One selection, mapped through every change unless a transaction sets it
/// - `version` increments on each applied change
///
/// ```rust
/// # use noteblocks_engine::Document;
/// let doc = Document::from_bytes("\n∞∞∞text\nhello".as_bytes()).unwrap();
/// assert_eq!(doc.line_count(), 3);
/// assert_eq!(doc.text(), "\n∞∞∞text\nhello");
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) buffer: Rope,
    pub(crate) tree: SyntaxNode,
    pub(crate) selection: Selection,
    pub(crate) version: u64,
}

impl Document {
    /// Create a new document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    pub fn from_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        let tree = noteblocks_syntax::parse(text);

        Self {
            buffer,
            tree,
            selection: Selection::cursor(len), // Start with cursor at end
            version: 0,
        }
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn tree(&self) -> &SyntaxNode {
        &self.tree
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Slice the buffer, clamping the range to the document bounds.
    pub fn slice_to_cow(&self, range: std::ops::Range<usize>) -> std::borrow::Cow<'_, str> {
        let doc_len = self.buffer.len();
        let start = range.start.min(doc_len);
        let end = range.end.min(doc_len).max(start);
        self.buffer.slice_to_cow(start..end)
    }

    /// Number of lines; an empty buffer has one.
    pub fn line_count(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len()) + 1
    }

    /// Zero-based line containing `offset`.
    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.buffer.line_of_offset(offset.min(self.buffer.len()))
    }

    /// Offset of the first byte of zero-based `line`, or `None` past the end.
    pub fn offset_of_line(&self, line: usize) -> Option<usize> {
        (line < self.line_count()).then(|| self.buffer.offset_of_line(line))
    }

    /// Nearest char boundary at or before `offset`, clamped to the buffer.
    pub fn snap_to_char_boundary(&self, offset: usize) -> usize {
        let len = self.buffer.len();
        let offset = offset.min(len);
        let line = self.buffer.line_of_offset(offset);
        let start = self.buffer.offset_of_line(line);
        let end = self.offset_of_line(line + 1).unwrap_or(len);

        let text = self.buffer.slice_to_cow(start..end);
        let mut column = offset - start;
        while !text.is_char_boundary(column) {
            column -= 1;
        }
        start + column
    }

    pub fn lines(&self) -> impl Iterator<Item = LineRef> + '_ {
        lines_with_spans(&self.buffer)
    }

    /// Offset one grapheme cluster before `offset`.
    pub fn prev_grapheme(&self, offset: usize) -> usize {
        self.buffer.prev_grapheme_offset(offset).unwrap_or(0)
    }

    /// Offset one grapheme cluster after `offset`.
    pub fn next_grapheme(&self, offset: usize) -> usize {
        let len = self.buffer.len();
        self.buffer.next_grapheme_offset(offset).unwrap_or(len)
    }

    /// Apply a change set, reparse, and map the selection through it.
    ///
    /// Returns the ranges of inserted text in new-document offsets.
    pub(crate) fn apply_changes(
        &mut self,
        changes: &ChangeSet,
        selection: Option<Selection>,
    ) -> Vec<std::ops::Range<usize>> {
        let delta = changes.to_delta(self.buffer.len());

        let mut changed = Vec::new();
        let mut cursor = 0;
        for op in delta.els.iter() {
            match op {
                xi_rope::delta::DeltaElement::Copy(from, to) => {
                    cursor += to - from;
                }
                xi_rope::delta::DeltaElement::Insert(inserted) => {
                    let start = cursor;
                    cursor += inserted.len();
                    changed.push(start..cursor);
                }
            }
        }

        let mapped = self.selection.map(|pos| map_offset(&delta, pos, true));

        if !changes.is_empty() {
            self.buffer = delta.apply(&self.buffer);
            self.tree = noteblocks_syntax::parse(&self.buffer.to_string());
            self.version += 1;
        }

        self.selection = selection
            .unwrap_or(mapped)
            .map(|pos| self.snap_to_char_boundary(pos));

        changed
    }
}

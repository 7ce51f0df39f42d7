use crate::editing::Document;
use crate::editing::commands::{Cmd, compile_command};
use crate::editing::patch::Patch;
use crate::editing::transaction::Transaction;
use crate::extension::{AtomicRanges, LayerView, NoteBlocks, ViewUpdate};

/// Editor options. The note-blocks bundle is the only thing to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub note_blocks: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { note_blocks: true }
    }
}

/// A document plus the optional note-blocks bundle.
///
/// Every update goes through [`Editor::dispatch`]: filter, apply, update
/// derived state. Each step completes before `dispatch` returns.
#[derive(Debug)]
pub struct Editor {
    document: Document,
    note_blocks: Option<NoteBlocks>,
}

impl Editor {
    pub fn new(document: Document, config: EditorConfig) -> Self {
        let note_blocks = config.note_blocks.then(|| NoteBlocks::new(&document));
        Self {
            document,
            note_blocks,
        }
    }

    /// Editor with the note-blocks bundle installed.
    pub fn with_extension(document: Document) -> Self {
        Self::new(document, EditorConfig { note_blocks: true })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn note_blocks(&self) -> Option<&NoteBlocks> {
        self.note_blocks.as_ref()
    }

    /// Filter and apply a transaction, then refresh derived state.
    pub fn dispatch(&mut self, tr: Transaction) -> Patch {
        let tr = match &self.note_blocks {
            Some(bundle) => bundle.filter(tr),
            None => tr,
        };

        let doc_changed = tr.doc_changed();
        let changed = self.document.apply_changes(&tr.changes, tr.selection);

        if let Some(bundle) = &mut self.note_blocks {
            bundle.update(doc_changed, &self.document);
        }

        Patch {
            changed,
            new_selection: self.document.selection(),
            version: self.document.version(),
            doc_changed,
        }
    }

    /// Compile a command against the current state and dispatch it.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let no_ranges = AtomicRanges::default();
        let atomic = self
            .note_blocks
            .as_ref()
            .map_or(&no_ranges, |bundle| bundle.atomic_ranges());
        let tr = compile_command(&self.document, atomic, &cmd);
        self.dispatch(tr)
    }

    /// Forward a view update to the background layer.
    pub fn update_layer(&mut self, update: &ViewUpdate, view: &dyn LayerView) -> bool {
        match &mut self.note_blocks {
            Some(bundle) => bundle.update_layer(update, view),
            None => false,
        }
    }

    /// Gutter label for 1-based `line_no`.
    ///
    /// Relative to the enclosing block with the bundle installed, the plain
    /// line number without it.
    pub fn line_number(&self, line_no: usize) -> String {
        match &self.note_blocks {
            Some(bundle) => bundle.line_number(line_no, &self.document),
            None if (1..=self.document.line_count()).contains(&line_no) => line_no.to_string(),
            None => String::new(),
        }
    }
}

/*!
 * # Editing Core Module
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: xi-rope Buffer
 * - The entire note buffer is stored in a single **`xi_rope::Rope`**
 * - **Lossless round-trip**: saving writes rope bytes verbatim
 *
 * ### 2. Transactions
 * - Every update is a **`Transaction`**: a `ChangeSet`, an optional explicit
 *   `Selection` and annotations
 * - Change sets compile to xi-rope **Deltas**; selections that are not set
 *   explicitly are mapped through the delta
 * - `Annotation::InitialData` marks whole-document loads
 *
 * ### 3. Commands
 * - Key presses compile to **Commands** (`Cmd` enum), which compile to
 *   transactions against the current selection
 * - Motion and single-character deletes consult the atomic delimiter ranges
 *
 * ### 4. Editor Pipeline
 * - `Editor::dispatch` runs the note-blocks filter chain, applies the
 *   surviving changes, reparses and refreshes derived block state
 * - The result is a **`Patch`** with changed ranges, the new selection and
 *   the document version
 *
 * ## Module Structure
 *
 * - **`document`**: `Document` with the rope buffer and its syntax tree
 * - **`transaction`**: `ChangeSet`, `Selection`, `Transaction`
 * - **`commands`**: `Cmd` enum and its compilation to transactions
 * - **`editor`**: `Editor` and `EditorConfig`
 * - **`patch`**: edit result metadata
 *
 * ## Usage Pattern
 *
 * ```rust
 * use noteblocks_engine::editing::*;
 *
 * let doc = Document::from_bytes("\n∞∞∞text\nhello".as_bytes()).unwrap();
 * let mut editor = Editor::with_extension(doc);
 *
 * // The cursor starts at the end; type there
 * let patch = editor.apply(Cmd::InsertText { text: " world".to_string() });
 * assert!(patch.doc_changed);
 *
 * // Selections never reach into the first delimiter
 * let patch = editor.apply(Cmd::SelectAll);
 * assert_eq!(patch.new_selection.from(), 15);
 * ```
 */

pub mod commands;
pub mod document;
pub mod editor;
pub mod patch;
pub mod transaction;

pub use commands::Cmd;
pub use document::Document;
pub use editor::{Editor, EditorConfig};
pub use patch::Patch;
pub use transaction::{Annotation, Change, ChangeSet, Selection, Transaction, map_offset};

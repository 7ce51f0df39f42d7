//! # noteblocks-engine
//!
//! Keeps a note buffer segmented into blocks while it is edited, and keeps
//! everything that depends on that segmentation in sync.
//!
//! - [`editing`]: the rope-backed [`Document`], transactions, commands and
//!   the [`Editor`] that applies them
//! - [`blocks`]: the block list, the indexer that derives it from the syntax
//!   tree and the cached [`BlockState`]
//! - [`extension`]: the [`NoteBlocks`] bundle of consumers: delimiter
//!   decorations, atomic ranges, background bands, the structural guard and
//!   the relative line-number gutter
//! - [`io`]: reading and writing buffers
//!
//! Everything is single-threaded; shared state uses `Rc`.

pub mod blocks;
pub mod editing;
pub mod extension;
pub mod io;
pub mod text;

// Re-export key types for easier usage
pub use blocks::{Block, BlockList, BlockState, IndexError};
pub use editing::{
    Annotation, Change, ChangeSet, Cmd, Document, Editor, EditorConfig, Patch, Selection,
    Transaction,
};
pub use extension::{LayerView, NoteBlocks, ViewUpdate};
pub use io::*;
pub use text::Span;

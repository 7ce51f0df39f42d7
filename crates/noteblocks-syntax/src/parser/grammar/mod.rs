//! # Grammar Rules
//!
//! Each function takes a `&mut Parser`, inspects tokens (`p.at()`, `p.nth()`),
//! consumes them (`p.bump()`) and wraps them in nodes with
//! `p.start()` → `complete()`.
//!
//! ```text
//! DOCUMENT      = ERROR? NOTE*
//! NOTE          = NOTE_DELIMITER NOTE_CONTENT
//! NOTE_DELIMITER = NEWLINE MARK NOTE_LANGUAGE NOTE_AUTO? NEWLINE
//! ```
//!
//! ## Error Recovery
//!
//! Text in front of the first delimiter cannot belong to any note, so it is
//! wrapped in an ERROR node. Every other byte belongs to some note's content.
//! The grammar never fails; it always produces a tree holding every input byte.

mod note;

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Parse the root document.
///
/// This is the entry point for parsing. It creates a DOCUMENT node containing
/// an optional ERROR preamble and then every note in order.
pub fn document(p: &mut Parser<'_, '_>) {
    let m = p.start();

    if !p.at_end() && !note::at_delimiter(p) {
        note::preamble(p);
    }

    while !p.at_end() {
        note::note(p);
    }

    m.complete(p, SyntaxKind::DOCUMENT);
}

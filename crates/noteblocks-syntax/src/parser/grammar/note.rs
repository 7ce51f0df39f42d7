//! Note-level rules: delimiters and the content between them.

use crate::parser::Parser;
use crate::syntax_kind::SyntaxKind;

/// Suffix marking a note whose language should be auto-detected.
const AUTO_SUFFIX: &str = "a";

/// Is the parser looking at `\n∞∞∞lang[-a]\n`?
pub(super) fn at_delimiter(p: &Parser<'_, '_>) -> bool {
    if !(p.at(SyntaxKind::NEWLINE)
        && p.nth(1) == SyntaxKind::MARK
        && p.nth(2) == SyntaxKind::WORD)
    {
        return false;
    }
    match p.nth(3) {
        SyntaxKind::NEWLINE => true,
        SyntaxKind::DASH => {
            p.nth(4) == SyntaxKind::WORD
                && p.nth_text(4) == AUTO_SUFFIX
                && p.nth(5) == SyntaxKind::NEWLINE
        }
        _ => false,
    }
}

/// A note: its delimiter and the (possibly empty) content that follows.
///
/// Callers guarantee the parser is at a delimiter.
pub(super) fn note(p: &mut Parser<'_, '_>) {
    let m = p.start();
    delimiter(p);
    content(p);
    m.complete(p, SyntaxKind::NOTE);
}

fn delimiter(p: &mut Parser<'_, '_>) {
    let m = p.start();
    p.bump(); // NEWLINE
    p.bump(); // MARK

    let lang = p.start();
    p.bump();
    lang.complete(p, SyntaxKind::NOTE_LANGUAGE);

    if p.at(SyntaxKind::DASH) {
        let auto = p.start();
        p.bump();
        p.bump();
        auto.complete(p, SyntaxKind::NOTE_AUTO);
    }

    p.eat(SyntaxKind::NEWLINE);
    m.complete(p, SyntaxKind::NOTE_DELIMITER);
}

fn content(p: &mut Parser<'_, '_>) {
    let m = p.start();
    bump_until_delimiter(p);
    m.complete(p, SyntaxKind::NOTE_CONTENT);
}

/// Text before the first delimiter.
pub(super) fn preamble(p: &mut Parser<'_, '_>) {
    let m = p.start();
    bump_until_delimiter(p);
    m.complete(p, SyntaxKind::ERROR);
}

fn bump_until_delimiter(p: &mut Parser<'_, '_>) {
    while !p.at_end() && !at_delimiter(p) {
        p.bump();
    }
}

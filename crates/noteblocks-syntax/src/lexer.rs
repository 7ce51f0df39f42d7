//! # Lexer - Tokenizing a Note Buffer
//!
//! This module provides the first stage of parsing: breaking source text into
//! tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! **Every byte in the input appears in exactly one token**. Nothing is
//! skipped, so concatenating token texts gives back the original buffer:
//!
//! ```
//! use noteblocks_syntax::lexer::lex;
//!
//! let input = "\n∞∞∞text\nhello\n";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are context-free. The lexer does not know whether `∞∞∞` starts a
//! delimiter or is just text inside a note; the parser decides that by
//! looking at the surrounding newlines.
//!
//! - `∞∞∞` → `MARK`
//! - `[A-Za-z0-9_]+` → `WORD` (language names, the `a` of `-a`)
//! - `-` → `DASH`
//! - line endings → `NEWLINE`, spaces and tabs → `WHITESPACE`
//!
//! Everything else becomes `TEXT`, grouped into runs.
//!
//! [`SyntaxKind`]: crate::syntax_kind::SyntaxKind

use logos::Logos;

use crate::syntax_kind::SyntaxKind;

/// The three-character mark that opens every delimiter line.
pub const MARK: &str = "∞∞∞";

/// Token kinds produced by the Logos lexer.
///
/// This enum exists separately from [`SyntaxKind`] because Logos needs to
/// derive on it. Each variant maps to a corresponding `SyntaxKind` token.
///
/// [`SyntaxKind`]: crate::syntax_kind::SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"")]
pub enum TokenKind {
    /// Horizontal whitespace (spaces, tabs)
    #[regex(r"[ \t]+")]
    Whitespace,

    /// Line ending (LF or CRLF)
    #[regex(r"\r?\n")]
    Newline,

    /// Delimiter mark
    #[token("∞∞∞")]
    Mark,

    /// Language names and other ASCII words
    #[regex(r"[A-Za-z0-9_]+")]
    Word,

    #[token("-")]
    Dash,

    /// Plain text - anything not matched by other rules
    #[regex(r"[^\sA-Za-z0-9_∞-]+")]
    Text,
}

impl TokenKind {
    /// Convert to SyntaxKind.
    pub fn to_syntax_kind(self) -> SyntaxKind {
        match self {
            TokenKind::Whitespace => SyntaxKind::WHITESPACE,
            TokenKind::Newline => SyntaxKind::NEWLINE,
            TokenKind::Mark => SyntaxKind::MARK,
            TokenKind::Word => SyntaxKind::WORD,
            TokenKind::Dash => SyntaxKind::DASH,
            TokenKind::Text => SyntaxKind::TEXT,
        }
    }
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let kind = match result {
            Ok(token_kind) => token_kind.to_syntax_kind(),
            // Unrecognized input (a lone `∞`, a bare `\r`) is still text
            Err(()) => SyntaxKind::TEXT,
        };
        tokens.push((Token { kind, text }, span));
    }

    tokens
}

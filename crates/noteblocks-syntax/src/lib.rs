//! # noteblocks-syntax
//!
//! A lossless syntax tree for note buffers using [Rowan] + [Logos], following
//! the [rust-analyzer] architecture model.
//!
//! [Rowan]: https://docs.rs/rowan
//! [Logos]: https://docs.rs/logos
//! [rust-analyzer]: https://rust-analyzer.github.io/book/contributing/syntax.html
//!
//! ## The Note Buffer Format
//!
//! A buffer is a sequence of notes. Each note starts with a delimiter line
//! naming its language and runs until the next delimiter:
//!
//! ```text
//! \n∞∞∞text\n        ← delimiter (includes the leading newline)
//! hello              ← content
//! \n∞∞∞json-a\n      ← delimiter, "-a" = auto-detect language
//! {"a": 1}           ← content
//! ```
//!
//! Because the delimiter owns its leading newline, the first delimiter always
//! starts at offset 0 and every byte after it belongs to exactly one note.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Events → Sink → Rowan Tree
//!               (Logos)          (Grammar)        (GreenNodeBuilder)
//! ```
//!
//! - [`lexer`]: context-free tokens (`MARK`, `WORD`, `DASH`, `NEWLINE`, ...)
//! - [`parser`]: the grammar emits events; the sink builds the green tree
//! - [`ast`]: typed wrappers (`Document`, `Note`, `NoteDelimiter`, ...)
//!
//! Content bodies are never parsed further. Whatever language a note is
//! written in, its body is a flat run of tokens under `NOTE_CONTENT`.
//!
//! ## Quick Start
//!
//! ```
//! use noteblocks_syntax::{parse, SyntaxKind};
//!
//! let tree = parse("\n∞∞∞text\nhello\n");
//!
//! // The tree preserves all text
//! assert_eq!(tree.text().to_string(), "\n∞∞∞text\nhello\n");
//!
//! assert_eq!(tree.kind(), SyntaxKind::DOCUMENT);
//! let note = tree.children().next().unwrap();
//! assert_eq!(note.kind(), SyntaxKind::NOTE);
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod syntax_kind;

pub use parser::parse;
pub use syntax_kind::{NoteLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

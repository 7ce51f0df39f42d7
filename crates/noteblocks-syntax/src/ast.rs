//! Typed views over the untyped CST.
//!
//! Each wrapper holds a [`SyntaxNode`] of one known kind and exposes accessors
//! for its parts. Casting never allocates; the wrappers are as cheap to clone
//! as the node itself.

use crate::syntax_kind::{SyntaxKind, SyntaxNode};

/// A typed node backed by a [`SyntaxNode`] of a single kind.
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(node: SyntaxNode) -> Option<Self>;

    fn syntax(&self) -> &SyntaxNode;
}

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self(node))
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Document, DOCUMENT);
ast_node!(Note, NOTE);
ast_node!(NoteDelimiter, NOTE_DELIMITER);
ast_node!(NoteContent, NOTE_CONTENT);

impl Document {
    pub fn notes(&self) -> impl Iterator<Item = Note> + '_ {
        self.0.children().filter_map(Note::cast)
    }
}

impl Note {
    pub fn delimiter(&self) -> Option<NoteDelimiter> {
        self.0.children().find_map(NoteDelimiter::cast)
    }

    pub fn content(&self) -> Option<NoteContent> {
        self.0.children().find_map(NoteContent::cast)
    }
}

impl NoteDelimiter {
    /// Source text of a delimiter line, leading newline included.
    pub fn format(language: &str, auto: bool) -> String {
        let suffix = if auto { "-a" } else { "" };
        format!("\n{}{language}{suffix}\n", crate::lexer::MARK)
    }

    /// Language name written after the mark, e.g. `json` in `∞∞∞json-a`.
    pub fn language(&self) -> Option<String> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::NOTE_LANGUAGE)
            .map(|n| n.text().to_string())
    }

    /// Whether the delimiter carries the `-a` auto-detect suffix.
    pub fn is_auto(&self) -> bool {
        self.0
            .children()
            .any(|n| n.kind() == SyntaxKind::NOTE_AUTO)
    }
}

impl NoteContent {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

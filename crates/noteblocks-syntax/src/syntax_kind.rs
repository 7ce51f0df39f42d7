//! SyntaxKind enum for all tokens and nodes in the note-buffer CST.
//!
//! Tokens and nodes share a single enum, rust-analyzer style. Every byte of
//! the buffer appears as a token somewhere in the tree.

/// All syntax kinds for the note-buffer CST.
///
/// The `repr(u16)` ensures efficient storage in rowan's green tree.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// Line ending
    NEWLINE,
    /// The `∞∞∞` delimiter mark
    MARK,
    /// ASCII word: letters, digits and `_`
    WORD,
    /// `-` (the auto-detect suffix is `-a`)
    DASH,
    /// Anything else
    TEXT,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Document root, parent of every note
    DOCUMENT,
    /// A single note: delimiter followed by content
    NOTE,
    /// `\n∞∞∞lang[-a]\n`
    NOTE_DELIMITER,
    /// Language name inside a delimiter
    NOTE_LANGUAGE,
    /// `-a` auto-detect suffix inside a delimiter
    NOTE_AUTO,
    /// Body of a note, up to the next delimiter
    NOTE_CONTENT,

    /// Error recovery node (text before the first delimiter)
    ERROR,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Returns true if this kind is trivia (whitespace/newlines).
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::NEWLINE)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NoteLang {}

impl rowan::Language for NoteLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::ERROR as u16);
        // SAFETY: We check bounds above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<NoteLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<NoteLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<NoteLang>;

#[cfg(test)]
mod tests {
    use super::*;
    use rowan::Language;

    #[test]
    fn token_kinds_are_tokens() {
        assert!(SyntaxKind::WHITESPACE.is_token());
        assert!(SyntaxKind::MARK.is_token());
        assert!(SyntaxKind::EOF.is_token());
    }

    #[test]
    fn node_kinds_are_nodes() {
        assert!(SyntaxKind::DOCUMENT.is_node());
        assert!(SyntaxKind::NOTE_DELIMITER.is_node());
        assert!(SyntaxKind::ERROR.is_node());
    }

    #[test]
    fn trivia_detection() {
        assert!(SyntaxKind::WHITESPACE.is_trivia());
        assert!(SyntaxKind::NEWLINE.is_trivia());
        assert!(!SyntaxKind::MARK.is_trivia());
    }

    #[test]
    fn rowan_conversion_roundtrip() {
        let kind = SyntaxKind::NOTE_CONTENT;
        let raw: rowan::SyntaxKind = kind.into();
        let back = NoteLang::kind_from_raw(raw);
        assert_eq!(kind, back);
    }
}

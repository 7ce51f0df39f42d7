//! # Parser Events
//!
//! Events are the intermediate representation between parsing and tree
//! building. The parser emits a **flat sequence** of them and the
//! [`Sink`](super::sink::Sink) turns that sequence into a Rowan tree,
//! keeping a stack of open nodes: Start pushes, Finish pops.
//!
//! ```text
//! Start(NOTE)
//!   Start(NOTE_DELIMITER) ... Finish
//!   Start(NOTE_CONTENT) ... Finish
//! Finish
//! ```

use crate::syntax_kind::SyntaxKind;

/// An event emitted by the parser during tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Begin a new composite node.
    Start { kind: SyntaxKind },

    /// Add the next lexer token to the current node.
    Token { kind: SyntaxKind },

    /// Finish the current node.
    Finish,

    /// Reserved slot for a node whose marker has not been completed yet.
    Placeholder,
}

impl Event {
    /// Create a start event.
    pub fn start(kind: SyntaxKind) -> Self {
        Event::Start { kind }
    }

    /// Create a token event.
    pub fn token(kind: SyntaxKind) -> Self {
        Event::Token { kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_start_creation() {
        let event = Event::start(SyntaxKind::NOTE);
        assert_eq!(
            event,
            Event::Start {
                kind: SyntaxKind::NOTE
            }
        );
    }

    #[test]
    fn event_token_creation() {
        let event = Event::token(SyntaxKind::MARK);
        assert_eq!(
            event,
            Event::Token {
                kind: SyntaxKind::MARK
            }
        );
    }
}

//! Derives the block list from the note-buffer syntax tree.
//!
//! The walk is a single preorder pass. Each node kind maps to a [`Visit`]
//! decision: the root and note nodes are descended into, a delimiter is
//! recorded together with its content sibling and not descended, and
//! everything else (content bodies, preamble errors) is skipped whole.

use noteblocks_syntax::{SyntaxKind, SyntaxNode};
use rowan::WalkEvent;
use thiserror::Error;

use crate::blocks::types::{Block, BlockList};
use crate::editing::Document;
use crate::text::Span;

/// What the walk does on entering a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Descend,
    RecordAndStop,
    Skip,
}

pub fn classify(kind: SyntaxKind) -> Visit {
    match kind {
        SyntaxKind::DOCUMENT | SyntaxKind::NOTE => Visit::Descend,
        SyntaxKind::NOTE_DELIMITER => Visit::RecordAndStop,
        _ => Visit::Skip,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("delimiter at {}..{} has no content node", delimiter.start, delimiter.end)]
    MissingContent { delimiter: Span },
}

/// Index a syntax tree into blocks.
pub fn index_tree(root: &SyntaxNode) -> Result<BlockList, IndexError> {
    let mut blocks = Vec::new();
    let mut walk = root.preorder();

    while let Some(event) = walk.next() {
        let WalkEvent::Enter(node) = event else {
            continue;
        };

        match classify(node.kind()) {
            Visit::Descend => {}
            Visit::RecordAndStop => {
                let delimiter = Span::from(node.text_range());
                let content = node
                    .next_sibling()
                    .ok_or(IndexError::MissingContent { delimiter })?;
                blocks.push(Block::new(delimiter, content.text_range().into()));
                walk.skip_subtree();
            }
            Visit::Skip => walk.skip_subtree(),
        }
    }

    Ok(BlockList::new(blocks))
}

/// Index the document's current tree.
pub fn index(doc: &Document) -> Result<BlockList, IndexError> {
    index_tree(doc.tree())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rowan::GreenNodeBuilder;
    use rstest::rstest;

    fn blocks_of(input: &str) -> BlockList {
        index_tree(&noteblocks_syntax::parse(input)).unwrap()
    }

    #[test]
    fn indexes_two_notes() {
        let blocks = blocks_of("\n∞∞∞text\nhello\n∞∞∞json\n{}\n");
        assert_eq!(
            &blocks[..],
            &[
                Block::new(Span::new(0, 15), Span::new(15, 20)),
                Block::new(Span::new(20, 35), Span::new(35, 38)),
            ]
        );
    }

    #[rstest]
    #[case("", 0)]
    #[case("plain text, no delimiter", 0)]
    #[case("\n∞∞∞text\n", 1)]
    #[case("\n∞∞∞text\n\n∞∞∞markdown-a\n# hi\n\n∞∞∞rust\nfn main() {}", 3)]
    #[case("preamble\n∞∞∞text\nbody", 1)]
    fn block_count(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(blocks_of(input).len(), expected);
    }

    #[test]
    fn blocks_are_contiguous_and_cover_document() {
        let input = "\n∞∞∞text\na\n∞∞∞json-a\n\n∞∞∞rust\nfn x() {}\n";
        let blocks = blocks_of(input);

        assert_eq!(blocks[0].delimiter.start, 0);
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].content.end, pair[1].delimiter.start);
        }
        for block in blocks.iter() {
            assert_eq!(block.delimiter.end, block.content.start);
        }
        assert_eq!(blocks.last().map(|b| b.content.end), Some(input.len()));
    }

    #[test]
    fn indexing_twice_is_structurally_equal() {
        let tree = noteblocks_syntax::parse("\n∞∞∞text\nhello\n∞∞∞json\n{}\n");
        let first = index_tree(&tree).unwrap();
        let second = index_tree(&tree).unwrap();
        assert!(!first.ptr_eq(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn delimiter_without_content_fails() {
        let mut builder = GreenNodeBuilder::new();
        builder.start_node(SyntaxKind::DOCUMENT.into());
        builder.start_node(SyntaxKind::NOTE.into());
        builder.start_node(SyntaxKind::NOTE_DELIMITER.into());
        builder.token(SyntaxKind::NEWLINE.into(), "\n");
        builder.token(SyntaxKind::MARK.into(), "∞∞∞");
        builder.finish_node();
        builder.finish_node();
        builder.finish_node();
        let root = SyntaxNode::new_root(builder.finish());

        assert_eq!(
            index_tree(&root),
            Err(IndexError::MissingContent {
                delimiter: Span::new(0, 10)
            })
        );
    }

    #[rstest]
    #[case(SyntaxKind::DOCUMENT, Visit::Descend)]
    #[case(SyntaxKind::NOTE, Visit::Descend)]
    #[case(SyntaxKind::NOTE_DELIMITER, Visit::RecordAndStop)]
    #[case(SyntaxKind::NOTE_CONTENT, Visit::Skip)]
    #[case(SyntaxKind::ERROR, Visit::Skip)]
    fn classification(#[case] kind: SyntaxKind, #[case] expected: Visit) {
        assert_eq!(classify(kind), expected);
    }
}

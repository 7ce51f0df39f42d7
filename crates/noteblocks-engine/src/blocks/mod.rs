//! Block derivation: the block list, the indexer that computes it from the
//! syntax tree, and the cached state that keeps it current.

pub mod indexer;
pub mod state;
pub mod types;

pub use indexer::{IndexError, Visit, classify, index, index_tree};
pub use state::BlockState;
pub use types::{Block, BlockList};

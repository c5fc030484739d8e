//! Engine error types

use thiserror::Error;

/// Configuration errors surfaced at construction time.
///
/// Illegal placements and full boards are value-level conditions (`bool`
/// from `Board::place`, `None` from `SearchAi::best_move`), not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("board size must be at least 2, got {size}")]
    InvalidSize { size: usize },

    #[error("search depth must be at least 1")]
    InvalidDepth,
}

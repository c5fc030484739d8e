//! hexpath core - Hex game engine
//!
//! This crate provides the decision engine for the connection game Hex:
//! - Board model (rhombic grid, hex adjacency, edge-connectivity win test)
//! - Move enumeration with center-first ordering
//! - Shortest-connection-path evaluation (multi-source Dijkstra)
//! - Depth-limited minimax with alpha-beta pruning

pub mod ai;
pub mod board;
pub mod error;
pub mod eval;
pub mod moves;

// Re-exports for convenient access
pub use ai::SearchAi;
pub use board::{Board, Move, Player, MIN_BOARD_SIZE, NEIGHBOR_OFFSETS};
pub use error::EngineError;
pub use eval::{evaluate, positional_score, shortest_connection_cost, Weights, WIN_SCORE};
pub use moves::ordered_moves;

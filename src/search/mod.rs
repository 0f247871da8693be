//! Search: threat scanning, candidate generation, and minimax with
//! alpha-beta pruning over a per-decision transposition table

pub mod alphabeta;
pub mod movegen;
pub mod threat;
pub mod tt;

pub use alphabeta::Searcher;
pub use movegen::{relevant_moves, MAX_CANDIDATES, NEIGHBOR_RADIUS};
pub use tt::TranspositionTable;

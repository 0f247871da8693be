//! Position evaluation: weight table, pattern scoring, and the
//! per-decision evaluation cache

pub mod cache;
pub mod heuristic;
pub mod patterns;

pub use cache::EvalCache;
pub use heuristic::{evaluate, score_player};
pub use patterns::Weights;

//! Five-in-a-row decision engine
//!
//! A minimax-based move engine for Gomoku-style games on a
//! configurable N×N board (default 10×10):
//! - 5-in-a-row on any of the four axes wins
//! - tactical short-circuits for immediate wins, forced blocks, and
//!   open fours
//! - depth-limited minimax with alpha-beta pruning and a per-decision
//!   transposition table
//!
//! # Architecture
//!
//! - [`board`]: grid state, move history, incremental board digest
//! - [`rules`]: axis line scanning and win detection
//! - [`eval`]: pattern weights, static evaluation, evaluation cache
//! - [`search`]: threat scanning, candidate generation, alpha-beta
//! - [`engine`]: the [`Game`] orchestrator hosts talk to
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, GameMode, Player};
//!
//! let mut game = Game::new(10, GameMode::HumanVsAi).unwrap();
//! game.make_move(5, 5, Player::One);
//!
//! if let Some(pos) = game.find_best_move(2) {
//!     game.make_move(pos.row, pos.col, Player::Two);
//! }
//! ```
//!
//! # Decision priority
//!
//! `find_best_move` runs a fixed tactical ladder before searching:
//! 1. Immediate winning placement
//! 2. Block the opponent's immediate win
//! 3. Create an unstoppable open four
//! 4. Block the opponent's open three
//! 5. Alpha-beta search over ranked candidates near existing stones
//!
//! The engine is single-threaded and run-to-completion; hosts that
//! need a responsive UI run decisions off their presentation path on
//! their own thread.

pub mod board;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, DEFAULT_BOARD_SIZE};
pub use engine::{Decision, DecisionKind, Game, GameError, GameMode, GameStatus};
pub use eval::Weights;

//! Minimax with alpha-beta pruning and per-decision memoization
//!
//! The search mutates the board in place: place a candidate, recurse,
//! undo, in the same stack frame. Every node's score is memoized under
//! (digest, remaining depth, maximizing flag) before returning.

use tracing::trace;

use crate::board::{Board, Player};
use crate::eval::{evaluate, EvalCache, Weights};
use crate::rules::is_win_at;

use super::movegen::relevant_moves;
use super::tt::TranspositionTable;

/// Score bound for the alpha-beta window. Evaluation magnitudes stay
/// far below this, so `-INF`/`INF` act as unattained infinities.
pub const INF: i32 = i32::MAX;

/// Depth-limited minimax searcher.
///
/// Holds the transposition table and node counter for one decision;
/// [`Searcher::begin_decision`] resets both. Single-threaded and
/// run-to-completion, the board is exclusively owned by the in-flight
/// call.
#[derive(Debug, Default)]
pub struct Searcher {
    tt: TranspositionTable,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-decision state. The transposition key space is only
    /// unambiguous within a single depth budget, so the table must not
    /// survive across decisions.
    pub fn begin_decision(&mut self) {
        self.tt.clear();
        self.nodes = 0;
    }

    /// Nodes visited since the last `begin_decision`
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Entries currently memoized
    #[must_use]
    pub fn tt_len(&self) -> usize {
        self.tt.len()
    }

    /// Recursive minimax over the candidate moves.
    ///
    /// `mover` is the maximizing side throughout the tree; the
    /// minimizing layers place the opponent's stones. Terminal nodes
    /// (depth exhausted, a win through the last move, or a full board)
    /// return the static evaluation from `mover`'s perspective.
    #[allow(clippy::too_many_arguments)]
    pub fn minimax(
        &mut self,
        board: &mut Board,
        mover: Player,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        weights: &Weights,
        cache: &mut EvalCache,
    ) -> i32 {
        self.nodes += 1;

        let digest = board.digest();
        if let Some(score) = self.tt.probe(digest, depth, maximizing) {
            return score;
        }

        let won = board
            .last_move()
            .and_then(|last| board.get(last).map(|owner| (last, owner)))
            .is_some_and(|(last, owner)| is_win_at(board, last, owner));

        if depth == 0 || won || board.is_full() {
            let score = evaluate(board, mover, weights, cache);
            self.tt.store(digest, depth, maximizing, score);
            return score;
        }

        let moves = relevant_moves(board, mover);
        if moves.is_empty() {
            // Dense position with no empty neighborhood cells
            let score = evaluate(board, mover, weights, cache);
            self.tt.store(digest, depth, maximizing, score);
            return score;
        }

        let score = if maximizing {
            let mut best = -INF;
            for mv in moves {
                let placed = board.place(mv, mover);
                debug_assert!(placed);
                let score =
                    self.minimax(board, mover, depth - 1, alpha, beta, false, weights, cache);
                board.undo_last();

                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    trace!(depth, ?mv, "beta cutoff");
                    break;
                }
            }
            best
        } else {
            let opponent = mover.opponent();
            let mut best = INF;
            for mv in moves {
                let placed = board.place(mv, opponent);
                debug_assert!(placed);
                let score =
                    self.minimax(board, mover, depth - 1, alpha, beta, true, weights, cache);
                board.undo_last();

                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    trace!(depth, ?mv, "alpha cutoff");
                    break;
                }
            }
            best
        };

        self.tt.store(digest, depth, maximizing, score);
        score
    }
}

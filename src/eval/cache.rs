//! Per-decision cache for pattern and threat queries
//!
//! Entries are keyed by the board digest (plus the queried player), so
//! results from earlier board states are unreachable after any
//! mutation. The whole cache is additionally dropped at every external
//! board change and at the start of each decision; no attempt is made
//! at partial invalidation.

use std::collections::HashMap;

use crate::board::{Player, Pos};

/// Memoized results of the expensive repeated queries made while one
/// decision is in flight.
#[derive(Debug, Default)]
pub struct EvalCache {
    /// Immediate winning placement per (digest, player)
    win_moves: HashMap<(u64, Player), Option<Pos>>,
    /// Open-four-creating placement per (digest, player)
    open_four_moves: HashMap<(u64, Player), Option<Pos>>,
    /// Open-three continuation cells per (digest, player)
    open_threes: HashMap<(u64, Player), Vec<Pos>>,
    /// Static evaluation per (digest, maximizing player)
    evaluations: HashMap<(u64, Player), i32>,
}

impl EvalCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry. Called whenever the board mutates outside the
    /// search and at the top of every decision.
    pub fn clear(&mut self) {
        self.win_moves.clear();
        self.open_four_moves.clear();
        self.open_threes.clear();
        self.evaluations.clear();
    }

    pub fn win_move(&self, digest: u64, player: Player) -> Option<Option<Pos>> {
        self.win_moves.get(&(digest, player)).copied()
    }

    pub fn put_win_move(&mut self, digest: u64, player: Player, result: Option<Pos>) {
        self.win_moves.insert((digest, player), result);
    }

    pub fn open_four_move(&self, digest: u64, player: Player) -> Option<Option<Pos>> {
        self.open_four_moves.get(&(digest, player)).copied()
    }

    pub fn put_open_four_move(&mut self, digest: u64, player: Player, result: Option<Pos>) {
        self.open_four_moves.insert((digest, player), result);
    }

    pub fn open_three(&self, digest: u64, player: Player) -> Option<&Vec<Pos>> {
        self.open_threes.get(&(digest, player))
    }

    pub fn put_open_three(&mut self, digest: u64, player: Player, cells: Vec<Pos>) {
        self.open_threes.insert((digest, player), cells);
    }

    pub fn evaluation(&self, digest: u64, mover: Player) -> Option<i32> {
        self.evaluations.get(&(digest, mover)).copied()
    }

    pub fn put_evaluation(&mut self, digest: u64, mover: Player, score: i32) {
        self.evaluations.insert((digest, mover), score);
    }

    /// Total cached entries across all query kinds
    #[must_use]
    pub fn len(&self) -> usize {
        self.win_moves.len()
            + self.open_four_moves.len()
            + self.open_threes.len()
            + self.evaluations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Per-decision transposition table
//!
//! Memoizes minimax results keyed by (board digest, remaining depth,
//! maximizing flag). The key space is only locally unambiguous, so the
//! table is scoped to exactly one decision: it is cleared at the start
//! of every `find_best_move` and never reused across depth budgets.

use std::collections::HashMap;

/// Transposition table mapping a search node to its score.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<(u64, u32, bool), i32>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a previously memoized node
    #[inline]
    #[must_use]
    pub fn probe(&self, digest: u64, depth: u32, maximizing: bool) -> Option<i32> {
        self.entries.get(&(digest, depth, maximizing)).copied()
    }

    /// Memoize a node's score
    #[inline]
    pub fn store(&mut self, digest: u64, depth: u32, maximizing: bool, score: i32) {
        self.entries.insert((digest, depth, maximizing), score);
    }

    /// Drop all entries; called once per decision
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

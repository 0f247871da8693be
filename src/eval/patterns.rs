//! Pattern weight table for line evaluation
//!
//! Each (consecutive count, blocked ends) pair from the line scanner
//! maps to a tactical weight. The defaults are the canonical table;
//! hosts may substitute their own as long as the five-in-a-row weight
//! dominates everything a non-winning position can accumulate.

use serde::{Deserialize, Serialize};

/// Scoring weights for line patterns.
///
/// | pattern | default |
/// |---|---|
/// | five+ in a row | 1,000,000 |
/// | open four | 100,000 |
/// | closed four | 10,000 |
/// | open three | 1,000 |
/// | closed three | 100 |
/// | open two | 10 |
/// | immediate-threat bonus | 500,000 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Five or more in a row, any blockage: a winning line
    pub five: i32,
    /// Four with both ends open: unstoppable next move
    pub open_four: i32,
    /// Four with one blocked end
    pub closed_four: i32,
    /// Three with both ends open
    pub open_three: i32,
    /// Three with one blocked end
    pub closed_three: i32,
    /// Two with both ends open
    pub open_two: i32,
    /// Folded into the static evaluation when a side has an immediate
    /// winning placement available
    pub immediate_threat: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            five: 1_000_000,
            open_four: 100_000,
            closed_four: 10_000,
            open_three: 1_000,
            closed_three: 100,
            open_two: 10,
            immediate_threat: 500_000,
        }
    }
}

impl Weights {
    /// Weight for one scanned line
    #[inline]
    #[must_use]
    pub fn line_score(&self, count: u8, blocked: u8) -> i32 {
        match (count, blocked) {
            (5.., _) => self.five,
            (4, 0) => self.open_four,
            (4, 1) => self.closed_four,
            (3, 0) => self.open_three,
            (3, 1) => self.closed_three,
            (2, 0) => self.open_two,
            _ => 0,
        }
    }
}

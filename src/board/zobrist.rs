//! Zobrist hashing for board digests
//!
//! Each (cell, player) pair gets a precomputed random value; the board
//! digest is the XOR of the values for every placed stone. Placing or
//! removing a stone is an O(1) XOR, so the digest stays current through
//! the search's place/undo cycles without any rescans.

use super::Player;

/// Zobrist value table sized for one board.
///
/// Values come from a fixed-seed LCG so digests are reproducible
/// across runs (useful when replaying logged games).
#[derive(Debug, Clone)]
pub struct ZobristTable {
    /// Random values per cell, one per player
    values: Vec<[u64; 2]>,
}

impl ZobristTable {
    /// Create a table covering `cells` board cells.
    #[must_use]
    pub fn new(cells: usize) -> Self {
        // Constants from Knuth's MMIX LCG
        let mut seed: u64 = 0x1234_5678_9ABC_DEF0;
        let mut next_rand = || {
            seed = seed
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1);
            seed
        };

        let values = (0..cells).map(|_| [next_rand(), next_rand()]).collect();
        Self { values }
    }

    /// Value to XOR into a digest when a stone enters or leaves a cell
    #[inline]
    pub fn value(&self, cell_idx: usize, player: Player) -> u64 {
        self.values[cell_idx][player.idx()]
    }
}

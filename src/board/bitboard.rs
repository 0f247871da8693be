//! Bit-plane implementation for fast stone lookups

/// One bit per cell, sized at construction for an N×N board.
///
/// The board keeps one plane per player; digest updates and stone
/// counting work directly on the packed words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitboard {
    bits: Vec<u64>,
    cells: usize,
}

impl Bitboard {
    /// Create an empty plane covering `cells` board cells
    pub fn new(cells: usize) -> Self {
        Self {
            bits: vec![0; cells.div_ceil(64)],
            cells,
        }
    }

    /// Set the bit at a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < self.cells);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear the bit at a cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < self.cells);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check whether the bit at a cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < self.cells);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if no bit is set
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        let cells = self.cells;
        self.bits
            .iter()
            .enumerate()
            .flat_map(move |(word_idx, &word)| {
                std::iter::successors(
                    (word != 0).then_some(word),
                    |w| {
                        let next = w & (w - 1);
                        (next != 0).then_some(next)
                    },
                )
                .map(move |w| word_idx * 64 + w.trailing_zeros() as usize)
            })
            .filter(move |&idx| idx < cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear() {
        let mut bb = Bitboard::new(100);
        assert!(!bb.get(55));
        bb.set(55);
        assert!(bb.get(55));
        bb.clear(55);
        assert!(!bb.get(55));
    }

    #[test]
    fn count_tracks_set_bits() {
        let mut bb = Bitboard::new(100);
        for idx in [0, 63, 64, 99] {
            bb.set(idx);
        }
        assert_eq!(bb.count(), 4);
        assert!(!bb.is_empty());
    }

    #[test]
    fn iter_ones_ascending() {
        let mut bb = Bitboard::new(100);
        for idx in [99, 3, 64, 12] {
            bb.set(idx);
        }
        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![3, 12, 64, 99]);
    }

    #[test]
    fn empty_plane_iterates_nothing() {
        let bb = Bitboard::new(25);
        assert_eq!(bb.iter_ones().count(), 0);
        assert!(bb.is_empty());
    }
}

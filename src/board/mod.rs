//! Board representation for the five-in-a-row engine

pub mod bitboard;
pub mod board;
pub mod zobrist;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use zobrist::ZobristTable;

use serde::{Deserialize, Serialize};

/// Default board size (10x10)
pub const DEFAULT_BOARD_SIZE: usize = 10;
/// Smallest board that can hold a five-in-a-row
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest supported board (positions are stored as `u8` coordinates)
pub const MAX_BOARD_SIZE: usize = 64;

/// One of the two players.
///
/// `One` is the side that moves first in a fresh game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opposing player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Bit-plane index for this player
    #[inline]
    pub(crate) fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Linear cell index for a board of the given size
    #[inline]
    pub fn index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

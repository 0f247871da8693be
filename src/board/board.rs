//! Grid state, move history, and the incremental board digest

use super::{Bitboard, Player, Pos, ZobristTable, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Game board with move history.
///
/// The board owns the grid state exclusively; the search mutates it in
/// place through `place`/`undo_last` pairs and restores it before
/// returning. The size is fixed for the lifetime of the instance.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    /// One bit-plane per player, indexed by `Player::idx`
    planes: [Bitboard; 2],
    /// Placed (position, player) pairs in play order
    history: Vec<(Pos, Player)>,
    /// Zobrist digest of the current grid contents
    digest: u64,
    zobrist: ZobristTable,
}

impl Board {
    /// Create an empty `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
    /// Hosts that need fallible construction go through
    /// [`Game::new`](crate::engine::Game::new).
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} out of range"
        );
        let cells = size * size;
        Self {
            size,
            planes: [Bitboard::new(cells), Bitboard::new(cells)],
            history: Vec::with_capacity(cells),
            digest: 0,
            zobrist: ZobristTable::new(cells),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center cell, the opening candidate on an empty board
    #[inline]
    pub fn center(&self) -> Pos {
        let mid = (self.size / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Whether signed coordinates land on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Stone at a position, `None` for an empty cell
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        let idx = pos.index(self.size);
        if self.planes[0].get(idx) {
            Some(Player::One)
        } else if self.planes[1].get(idx) {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Check if a position is an empty cell
    #[inline]
    pub fn is_empty_cell(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Place a stone.
    ///
    /// Returns `false` without touching the board when the coordinates
    /// are out of range or the cell is occupied. On success the move is
    /// appended to the history and the digest is updated.
    pub fn place(&mut self, pos: Pos, player: Player) -> bool {
        if !self.contains(i32::from(pos.row), i32::from(pos.col)) {
            return false;
        }
        let idx = pos.index(self.size);
        if self.planes[0].get(idx) || self.planes[1].get(idx) {
            return false;
        }
        self.planes[player.idx()].set(idx);
        self.digest ^= self.zobrist.value(idx, player);
        self.history.push((pos, player));
        true
    }

    /// Revert the most recent placement.
    ///
    /// The search pairs every hypothetical `place` with an `undo_last`
    /// in the same stack frame. Returns the reverted move, or `None` on
    /// an untouched board.
    pub fn undo_last(&mut self) -> Option<(Pos, Player)> {
        let (pos, player) = self.history.pop()?;
        let idx = pos.index(self.size);
        self.planes[player.idx()].clear(idx);
        self.digest ^= self.zobrist.value(idx, player);
        Some((pos, player))
    }

    /// Most recent placement, if any
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Placed moves in play order
    #[inline]
    pub fn history(&self) -> &[(Pos, Player)] {
        &self.history
    }

    /// True iff every cell is occupied (O(1) via the history length)
    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.size * self.size
    }

    /// Total stones on the board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.history.len()
    }

    /// Zobrist digest of the current grid contents.
    ///
    /// Kept current by `place`/`undo_last`; used as the cache and
    /// transposition-table key.
    #[inline]
    pub fn digest(&self) -> u64 {
        self.digest
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_and_get() {
        let mut board = Board::new(10);
        assert!(board.place(Pos::new(4, 5), Player::One));
        assert_eq!(board.get(Pos::new(4, 5)), Some(Player::One));
        assert_eq!(board.get(Pos::new(5, 4)), None);
        assert_eq!(board.last_move(), Some(Pos::new(4, 5)));
    }

    #[test]
    fn occupied_cell_rejected_without_side_effects() {
        let mut board = Board::new(10);
        assert!(board.place(Pos::new(4, 5), Player::One));
        let digest = board.digest();

        assert!(!board.place(Pos::new(4, 5), Player::Two));
        assert_eq!(board.get(Pos::new(4, 5)), Some(Player::One));
        assert_eq!(board.history().len(), 1);
        assert_eq!(board.digest(), digest);
    }

    #[test]
    fn out_of_range_rejected() {
        let mut board = Board::new(10);
        assert!(!board.place(Pos::new(10, 0), Player::One));
        assert!(!board.place(Pos::new(0, 10), Player::One));
        assert!(board.history().is_empty());
    }

    #[test]
    fn undo_restores_cell_and_history() {
        let mut board = Board::new(10);
        board.place(Pos::new(1, 1), Player::One);
        board.place(Pos::new(2, 2), Player::Two);

        assert_eq!(board.undo_last(), Some((Pos::new(2, 2), Player::Two)));
        assert!(board.is_empty_cell(Pos::new(2, 2)));
        assert_eq!(board.last_move(), Some(Pos::new(1, 1)));
        assert_eq!(board.history().len(), 1);
    }

    #[test]
    fn undo_on_empty_board() {
        let mut board = Board::new(10);
        assert_eq!(board.undo_last(), None);
    }

    #[test]
    fn digest_returns_after_place_undo() {
        let mut board = Board::new(10);
        let empty = board.digest();
        board.place(Pos::new(3, 3), Player::One);
        let placed = board.digest();
        assert_ne!(empty, placed);

        board.undo_last();
        assert_eq!(board.digest(), empty);
    }

    #[test]
    fn digest_distinguishes_players() {
        let mut a = Board::new(10);
        let mut b = Board::new(10);
        a.place(Pos::new(3, 3), Player::One);
        b.place(Pos::new(3, 3), Player::Two);
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn is_full_small_board() {
        let mut board = Board::new(5);
        let mut player = Player::One;
        for r in 0..5u8 {
            for c in 0..5u8 {
                assert!(board.place(Pos::new(r, c), player));
                player = player.opponent();
            }
        }
        assert!(board.is_full());
        assert!(!board.place(Pos::new(0, 0), Player::One));
    }

    #[test]
    fn center_of_even_board() {
        assert_eq!(Board::new(10).center(), Pos::new(5, 5));
        assert_eq!(Board::new(19).center(), Pos::new(9, 9));
    }
}

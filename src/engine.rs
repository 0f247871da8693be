//! Game orchestrator
//!
//! [`Game`] owns the board, the evaluation cache, and the searcher, and
//! composes the tactical checks and the minimax search into
//! [`Game::find_best_move`]. This is the surface a UI or other host
//! consumes; rendering, input translation, and the frame loop are the
//! host's problem.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Player, Pos, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::eval::{EvalCache, Weights};
use crate::rules::winning_run;
use crate::search::alphabeta::INF;
use crate::search::{relevant_moves, threat, Searcher};

/// Errors reportable at construction time. Illegal moves are boolean
/// results, never errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("board size {size} is out of range ({min}-{max})", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSizeOutOfRange { size: usize },
}

/// Who is playing; stored for the host, the engine core ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    HumanVsAi,
    HumanVsHuman,
}

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(Player),
    /// Board full with no winning run
    Draw,
}

/// Which rung of the priority ladder produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// The mover wins with this placement
    ImmediateWin,
    /// The opponent would win there next move
    BlockWin,
    /// Creates an unstoppable open four for the mover
    OpenFour,
    /// Blocks the opponent's open three
    BlockOpenThree,
    /// Best-scoring candidate from the minimax search
    Search,
    /// No candidate improved on the initial bound; first candidate kept
    Fallback,
}

/// A decided move with search diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub pos: Pos,
    pub kind: DecisionKind,
    /// Minimax score of the chosen candidate; meaningful only for
    /// `Search` decisions
    pub score: i32,
    /// Nodes visited by the search phase
    pub nodes: u64,
}

/// A five-in-a-row game with its decision engine.
///
/// Single-threaded and run-to-completion: a decision call exclusively
/// owns the board until it returns, restoring it on every path. Hosts
/// wanting responsiveness run the call off their presentation path on
/// an independent clone.
///
/// # Example
///
/// ```
/// use gomoku::{Game, GameMode, Player};
///
/// let mut game = Game::new(10, GameMode::HumanVsAi).unwrap();
/// assert!(game.make_move(5, 5, Player::One));
///
/// // Engine answers for player two
/// let reply = game.find_best_move(2).unwrap();
/// assert!(game.make_move(reply.row, reply.col, Player::Two));
/// ```
pub struct Game {
    board: Board,
    mode: GameMode,
    current_player: Player,
    status: GameStatus,
    winning_sequence: Vec<Pos>,
    weights: Weights,
    cache: EvalCache,
    searcher: Searcher,
}

impl Game {
    /// Create a fresh empty game. The current player starts as
    /// [`Player::One`].
    pub fn new(board_size: usize, mode: GameMode) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(GameError::BoardSizeOutOfRange { size: board_size });
        }
        Ok(Self {
            board: Board::new(board_size),
            mode,
            current_player: Player::One,
            status: GameStatus::InProgress,
            winning_sequence: Vec::new(),
            weights: Weights::default(),
            cache: EvalCache::new(),
            searcher: Searcher::new(),
        })
    }

    /// Like [`Game::new`] with a custom evaluation weight table.
    pub fn with_weights(
        board_size: usize,
        mode: GameMode,
        weights: Weights,
    ) -> Result<Self, GameError> {
        let mut game = Self::new(board_size, mode)?;
        game.weights = weights;
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Override whose turn it is. Hosts that drive turn order
    /// themselves use this before asking for a decision.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Whether the coordinates name an empty in-range cell
    #[must_use]
    pub fn is_valid_move(&self, row: u8, col: u8) -> bool {
        self.board.contains(i32::from(row), i32::from(col))
            && self.board.is_empty_cell(Pos::new(row, col))
    }

    /// Place a stone for `player`.
    ///
    /// Returns `false` for an out-of-range or occupied cell, leaving
    /// the game untouched. On success the status is updated (win or
    /// draw detection anchored at this placement), all caches are
    /// invalidated, and the turn passes to the opponent.
    pub fn make_move(&mut self, row: u8, col: u8, player: Player) -> bool {
        let pos = Pos::new(row, col);
        if !self.board.place(pos, player) {
            return false;
        }
        self.cache.clear();

        if let Some(run) = winning_run(&self.board, pos, player) {
            self.winning_sequence = run;
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }

        self.current_player = player.opponent();
        true
    }

    /// Whether `player` has a winning run through the last-played cell.
    ///
    /// On a positive result the run is retrievable from
    /// [`Game::winning_sequence`]. Only the last placement is checked:
    /// a new win must pass through the most recent stone.
    pub fn check_winner(&mut self, player: Player) -> bool {
        let Some(last) = self.board.last_move() else {
            return false;
        };
        match winning_run(&self.board, last, player) {
            Some(run) => {
                self.winning_sequence = run;
                true
            }
            None => false,
        }
    }

    /// The detected winning run, sorted by coordinate; empty until a
    /// win is detected. Kept for presentation.
    #[must_use]
    pub fn winning_sequence(&self) -> &[Pos] {
        &self.winning_sequence
    }

    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Decide a move for the current player under a depth budget.
    ///
    /// Convenience wrapper around [`Game::decide`].
    pub fn find_best_move(&mut self, depth: u32) -> Option<Pos> {
        self.decide(depth).map(|d| d.pos)
    }

    /// Decide a move for the current player, with diagnostics.
    ///
    /// The tactical priority ladder, in order: win now, block the
    /// opponent's win, create an unstoppable open four, block the
    /// opponent's open three, then minimax over the ranked candidates.
    /// The order is the core tactical policy; reordering it materially
    /// changes play strength.
    ///
    /// Returns `None` only when no empty cell remains near the action
    /// (in particular on a full board).
    pub fn decide(&mut self, depth: u32) -> Option<Decision> {
        let start = Instant::now();
        let mover = self.current_player;
        let opponent = mover.opponent();

        // Fresh per decision: stale entries from other depth budgets
        // or board states must not leak in.
        self.cache.clear();
        self.searcher.begin_decision();

        if let Some(pos) = threat::immediate_win(&mut self.board, mover, &mut self.cache) {
            debug!(?mover, ?pos, "immediate win");
            return Some(Decision { pos, kind: DecisionKind::ImmediateWin, score: 0, nodes: 0 });
        }

        if let Some(pos) = threat::immediate_win(&mut self.board, opponent, &mut self.cache) {
            debug!(?mover, ?pos, "blocking opponent win");
            return Some(Decision { pos, kind: DecisionKind::BlockWin, score: 0, nodes: 0 });
        }

        if let Some(pos) = threat::open_four_move(&mut self.board, mover, &mut self.cache) {
            debug!(?mover, ?pos, "creating open four");
            return Some(Decision { pos, kind: DecisionKind::OpenFour, score: 0, nodes: 0 });
        }

        let open_threes = threat::open_three_positions(&self.board, opponent, &mut self.cache);
        if let Some(&pos) = open_threes.first() {
            debug!(?mover, ?pos, "blocking open three");
            return Some(Decision { pos, kind: DecisionKind::BlockOpenThree, score: 0, nodes: 0 });
        }

        let candidates = relevant_moves(&mut self.board, mover);
        let mut best_score = -INF;
        let mut best_move = None;

        for &mv in &candidates {
            let placed = self.board.place(mv, mover);
            debug_assert!(placed);
            let score = self.searcher.minimax(
                &mut self.board,
                mover,
                depth.saturating_sub(1),
                -INF,
                INF,
                false,
                &self.weights,
                &mut self.cache,
            );
            self.board.undo_last();

            // Strictly better only: ties keep the first-seen candidate
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let nodes = self.searcher.nodes();
        debug!(
            ?mover,
            depth,
            nodes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            ?best_move,
            best_score,
            "search complete"
        );

        match best_move {
            Some(pos) => Some(Decision { pos, kind: DecisionKind::Search, score: best_score, nodes }),
            // Only reachable with an empty candidate list or when every
            // line scores -INF; keep the first candidate if any.
            None => candidates.first().map(|&pos| Decision {
                pos,
                kind: DecisionKind::Fallback,
                score: best_score,
                nodes,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(10, GameMode::HumanVsAi).unwrap()
    }

    #[test]
    fn new_game_starts_with_player_one() {
        let g = game();
        assert_eq!(g.current_player(), Player::One);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert!(g.winning_sequence().is_empty());
    }

    #[test]
    fn rejects_bad_board_sizes() {
        assert_eq!(
            Game::new(4, GameMode::HumanVsAi).err(),
            Some(GameError::BoardSizeOutOfRange { size: 4 })
        );
        assert!(Game::new(5, GameMode::HumanVsAi).is_ok());
        assert_eq!(
            Game::new(65, GameMode::HumanVsAi).err(),
            Some(GameError::BoardSizeOutOfRange { size: 65 })
        );
    }

    #[test]
    fn make_move_flips_turn_and_rejects_occupied() {
        let mut g = game();
        assert!(g.make_move(4, 4, Player::One));
        assert_eq!(g.current_player(), Player::Two);

        assert!(!g.make_move(4, 4, Player::Two));
        assert_eq!(g.current_player(), Player::Two, "failed move keeps the turn");
        assert_eq!(g.board().stone_count(), 1);
    }

    #[test]
    fn make_move_out_of_range_is_false() {
        let mut g = game();
        assert!(!g.make_move(10, 0, Player::One));
        assert!(g.is_valid_move(9, 9));
        assert!(!g.is_valid_move(10, 9));
    }

    #[test]
    fn win_is_detected_on_placement() {
        let mut g = game();
        for c in 2..6 {
            assert!(g.make_move(5, c, Player::One));
        }
        assert_eq!(g.status(), GameStatus::InProgress);
        assert!(g.make_move(5, 6, Player::One));
        assert_eq!(g.status(), GameStatus::Won(Player::One));
        assert_eq!(g.winning_sequence().len(), 5);
        assert_eq!(g.winning_sequence().first(), Some(&Pos::new(5, 2)));
        assert_eq!(g.winning_sequence().last(), Some(&Pos::new(5, 6)));
    }

    #[test]
    fn check_winner_matches_last_move() {
        let mut g = game();
        for c in 0..5 {
            g.make_move(7, c, Player::Two);
        }
        assert!(g.check_winner(Player::Two));
        assert!(!g.check_winner(Player::One));
    }

    #[test]
    fn empty_board_decision_is_center() {
        let mut g = game();
        g.set_current_player(Player::Two);
        assert_eq!(g.find_best_move(2), Some(Pos::new(5, 5)));
    }

    #[test]
    fn takes_immediate_win_over_everything() {
        let mut g = game();
        // Mover has an open four; opponent also has an open three that
        // would otherwise demand a block.
        for c in 2..6 {
            g.make_move(5, c, Player::Two);
        }
        for c in 3..6 {
            g.make_move(7, c, Player::One);
        }
        g.set_current_player(Player::Two);

        let decision = g.decide(3).unwrap();
        assert_eq!(decision.kind, DecisionKind::ImmediateWin);
        assert!(decision.pos == Pos::new(5, 1) || decision.pos == Pos::new(5, 6));
    }

    #[test]
    fn blocks_opponent_win_when_not_winning() {
        let mut g = game();
        // Opponent (player one) threatens five at (5,4)/(5,9)
        for c in 5..9 {
            g.make_move(5, c, Player::One);
        }
        g.set_current_player(Player::Two);

        let decision = g.decide(3).unwrap();
        assert_eq!(decision.kind, DecisionKind::BlockWin);
        assert!(decision.pos == Pos::new(5, 4) || decision.pos == Pos::new(5, 9));
    }

    #[test]
    fn creates_open_four_when_safe() {
        let mut g = game();
        // Mover has an open three and no one threatens a win
        for c in 3..6 {
            g.make_move(5, c, Player::Two);
        }
        // Scattered opponent stones, no threats
        g.make_move(0, 0, Player::One);
        g.make_move(0, 9, Player::One);
        g.make_move(9, 0, Player::One);
        g.set_current_player(Player::Two);

        let decision = g.decide(3).unwrap();
        assert_eq!(decision.kind, DecisionKind::OpenFour);
        assert!(decision.pos == Pos::new(5, 2) || decision.pos == Pos::new(5, 6));
    }

    #[test]
    fn blocks_open_three_before_searching() {
        let mut g = game();
        // Opponent open three; mover has only scattered stones
        for c in 4..7 {
            g.make_move(6, c, Player::One);
        }
        g.make_move(0, 0, Player::Two);
        g.make_move(0, 2, Player::Two);
        g.make_move(9, 9, Player::Two);
        g.set_current_player(Player::Two);

        let decision = g.decide(3).unwrap();
        assert_eq!(decision.kind, DecisionKind::BlockOpenThree);
        assert!(decision.pos == Pos::new(6, 3) || decision.pos == Pos::new(6, 7));
    }

    #[test]
    fn quiet_position_falls_through_to_search() {
        let mut g = game();
        g.make_move(5, 5, Player::One);
        // Player two to move, nothing tactical on the board
        let decision = g.decide(2).unwrap();
        assert_eq!(decision.kind, DecisionKind::Search);
        assert!(decision.nodes > 0);
        assert!(g.is_valid_move(decision.pos.row, decision.pos.col));
    }

    #[test]
    fn decision_leaves_board_untouched() {
        let mut g = game();
        g.make_move(5, 5, Player::One);
        g.make_move(4, 4, Player::Two);
        g.make_move(5, 6, Player::One);
        let digest = g.board().digest();
        let stones = g.board().stone_count();

        let _ = g.decide(3);
        assert_eq!(g.board().digest(), digest);
        assert_eq!(g.board().stone_count(), stones);
    }

    #[test]
    fn full_board_yields_no_decision() {
        let mut g = Game::new(5, GameMode::HumanVsHuman).unwrap();
        // Period-4 stripes shifted two cells per row: no line of five
        // anywhere (runs max out at two).
        for r in 0..5u8 {
            for c in 0..5u8 {
                let player = if (c + 2 * r) % 4 < 2 { Player::One } else { Player::Two };
                assert!(g.board.place(Pos::new(r, c), player));
            }
        }
        assert!(g.is_board_full());
        assert_eq!(g.decide(2), None);
    }

    #[test]
    fn status_serializes() {
        let status = GameStatus::Won(Player::Two);
        assert_eq!(serde_json::to_string(&status).unwrap(), "{\"won\":\"two\"}");
    }
}

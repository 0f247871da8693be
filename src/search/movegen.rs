//! Candidate move generation
//!
//! Restricts the search to empty cells near existing stones and ranks
//! them with a cheap one-ply heuristic, bounding the branching factor
//! at the cost of occasionally excluding the true optimum.

use crate::board::{Board, Player, Pos};
use crate::rules::is_win_at;
use crate::rules::line::{scan, AXES};

/// Chebyshev radius around placed stones that defines the candidate
/// neighborhood
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Ranked candidates kept per node
pub const MAX_CANDIDATES: usize = 12;

/// Quick score for a candidate that wins outright
const QUICK_WIN: i32 = 1_000_000;

/// Empty cells within [`NEIGHBOR_RADIUS`] of any placed stone, in the
/// fixed deterministic scan order: the neighborhood of each history
/// entry in history order, by ascending row then column. Each cell
/// appears once. Empty on an empty board.
#[must_use]
pub fn neighborhood(board: &Board) -> Vec<Pos> {
    let size = board.size();
    let mut seen = vec![false; size * size];
    let mut cells = Vec::new();

    for &(stone, _) in board.history() {
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let r = i32::from(stone.row) + dr;
                let c = i32::from(stone.col) + dc;
                if !board.contains(r, c) {
                    continue;
                }
                let pos = Pos::new(r as u8, c as u8);
                let idx = pos.index(size);
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;
                if board.is_empty_cell(pos) {
                    cells.push(pos);
                }
            }
        }
    }

    cells
}

/// Candidate moves for the search, best first.
///
/// An empty board yields only the center. Otherwise the neighborhood
/// cells are scored by [`quick_move_score`], sorted descending (stable,
/// so ties keep scan order), and truncated to [`MAX_CANDIDATES`].
#[must_use]
pub fn relevant_moves(board: &mut Board, mover: Player) -> Vec<Pos> {
    if board.history().is_empty() {
        return vec![board.center()];
    }

    let cells = neighborhood(board);
    let mut scored: Vec<(Pos, i32)> = cells
        .into_iter()
        .map(|pos| {
            let score = quick_move_score(board, pos, mover);
            (pos, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(MAX_CANDIDATES);
    scored.into_iter().map(|(pos, _)| pos).collect()
}

/// One-ply heuristic for a candidate cell: its offensive value as the
/// mover's stone plus the defensive value of denying the opponent the
/// same cell. Defense is weighted slightly below offense so the engine
/// prefers its own win over a block when both score.
#[must_use]
pub fn quick_move_score(board: &mut Board, pos: Pos, mover: Player) -> i32 {
    let opponent = mover.opponent();
    let mut score = 0;

    let placed = board.place(pos, mover);
    debug_assert!(placed, "candidates are always empty cells");
    if is_win_at(board, pos, mover) {
        board.undo_last();
        return QUICK_WIN;
    }
    for axis in AXES {
        let line = scan(board, pos, mover, axis);
        score += offense_score(line.count, line.blocked);
    }
    board.undo_last();

    let placed = board.place(pos, opponent);
    debug_assert!(placed);
    for axis in AXES {
        let line = scan(board, pos, opponent, axis);
        score += defense_score(line.count, line.blocked);
    }
    board.undo_last();

    score
}

fn offense_score(count: u8, blocked: u8) -> i32 {
    match (count, blocked) {
        (5.., _) => 100_000,
        (4, 0) => 10_000,
        (4, 1) => 1_000,
        (3, 0) => 500,
        (3, 1) => 100,
        (2, 0) => 50,
        _ => 0,
    }
}

fn defense_score(count: u8, blocked: u8) -> i32 {
    match (count, blocked) {
        (5.., _) => 90_000,
        (4, 0) => 9_000,
        (4, 1) => 900,
        (3, 0) => 450,
        (3, 1) => 90,
        (2, 0) => 45,
        _ => 0,
    }
}

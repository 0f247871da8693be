//! Tactical threat scanning
//!
//! Finds immediate wins, forced blocks, and open-four-creating moves by
//! hypothetically placing stones on the bounded candidate neighborhood.
//! Every probe restores the board before returning; cost is
//! proportional to stones played, never to board area.

use crate::board::{Board, Player, Pos};
use crate::eval::EvalCache;
use crate::rules::is_win_at;
use crate::rules::line::{scan, AXES};

use super::movegen::neighborhood;

/// Find the first placement that wins outright for `player`.
///
/// Candidates are probed in the fixed neighborhood scan order; the
/// first hit is returned. Place-then-undo per candidate.
#[must_use]
pub fn immediate_win(board: &mut Board, player: Player, cache: &mut EvalCache) -> Option<Pos> {
    let digest = board.digest();
    if let Some(hit) = cache.win_move(digest, player) {
        return hit;
    }

    let mut result = None;
    for pos in neighborhood(board) {
        let placed = board.place(pos, player);
        debug_assert!(placed);
        let wins = is_win_at(board, pos, player);
        board.undo_last();
        if wins {
            result = Some(pos);
            break;
        }
    }

    cache.put_win_move(digest, player, result);
    result
}

/// Find the first placement that gives `player` an open four: four in
/// a row with both ends open, which the opponent cannot block on both
/// sides in one move.
#[must_use]
pub fn open_four_move(board: &mut Board, player: Player, cache: &mut EvalCache) -> Option<Pos> {
    let digest = board.digest();
    if let Some(hit) = cache.open_four_move(digest, player) {
        return hit;
    }

    let mut result = None;
    for pos in neighborhood(board) {
        let placed = board.place(pos, player);
        debug_assert!(placed);
        let open_four = AXES.iter().any(|&axis| {
            let line = scan(board, pos, player, axis);
            line.count >= 4 && line.blocked == 0
        });
        board.undo_last();
        if open_four {
            result = Some(pos);
            break;
        }
    }

    cache.put_open_four_move(digest, player, result);
    result
}

/// Continuation cells of `player`'s open threes.
///
/// For every stone of `player` and every axis, a run of exactly three
/// with zero blocked ends contributes the adjacent empty cells where
/// the run would extend. These are the cells the opponent considers
/// blocking, in stone/axis scan order.
#[must_use]
pub fn open_three_positions(board: &Board, player: Player, cache: &mut EvalCache) -> Vec<Pos> {
    let digest = board.digest();
    if let Some(cells) = cache.open_three(digest, player) {
        return cells.clone();
    }

    let mut positions = Vec::new();
    for &(pos, owner) in board.history() {
        if owner != player {
            continue;
        }
        for axis in AXES {
            let (dr, dc) = axis.delta();
            let mut count = 1u8;
            let mut blocked = 0u8;
            let mut continuations: Vec<Pos> = Vec::new();

            for sign in [1, -1] {
                // Three steps suffice: we are after runs of exactly three
                for k in 1..=3 {
                    let r = i32::from(pos.row) + dr * k * sign;
                    let c = i32::from(pos.col) + dc * k * sign;
                    if !board.contains(r, c) {
                        blocked += 1;
                        break;
                    }
                    let next = Pos::new(r as u8, c as u8);
                    match board.get(next) {
                        Some(p) if p == player => count += 1,
                        Some(_) => {
                            blocked += 1;
                            break;
                        }
                        None => {
                            continuations.push(next);
                            break;
                        }
                    }
                }
            }

            if count == 3 && blocked == 0 && !continuations.is_empty() {
                positions.extend(continuations);
            }
        }
    }

    cache.put_open_three(digest, player, positions.clone());
    positions
}

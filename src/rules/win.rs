//! Win detection anchored at the last-played cell
//!
//! A new five-in-a-row must pass through the most recent placement, so
//! the detector only ever scans the four axes through one cell instead
//! of rescanning the board.

use crate::board::{Board, Player, Pos};

use super::line::{scan, AXES, SCAN_REACH};

/// Check whether `player` has 5+ in a row through `pos`.
#[inline]
#[must_use]
pub fn is_win_at(board: &Board, pos: Pos, player: Player) -> bool {
    if board.get(pos) != Some(player) {
        return false;
    }
    AXES.iter().any(|&axis| scan(board, pos, player, axis).count >= 5)
}

/// Find the winning run of 5+ stones through `pos`, if one exists.
///
/// Axes are tried in their fixed enumeration order and the first
/// qualifying one wins. The returned run is the full contiguous stretch
/// of `player` stones along that axis, sorted by coordinate so the
/// first and last entries are the run's endpoints (kept only for
/// presentation).
#[must_use]
pub fn winning_run(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    if board.get(pos) != Some(player) {
        return None;
    }

    for axis in AXES {
        if scan(board, pos, player, axis).count < 5 {
            continue;
        }

        let (dr, dc) = axis.delta();
        let mut run = vec![pos];
        for sign in [1, -1] {
            for k in 1..=SCAN_REACH {
                let r = i32::from(pos.row) + dr * k * sign;
                let c = i32::from(pos.col) + dc * k * sign;
                if !board.contains(r, c) {
                    break;
                }
                let next = Pos::new(r as u8, c as u8);
                if board.get(next) == Some(player) {
                    run.push(next);
                } else {
                    break;
                }
            }
        }
        run.sort_unstable();
        return Some(run);
    }

    None
}

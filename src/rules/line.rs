//! Axis-wise line scanning
//!
//! The shared primitive behind win detection and evaluation: starting
//! from a cell, count consecutive same-player stones forward and
//! backward along one axis and classify each end as open or blocked.

use crate::board::{Board, Player, Pos};

/// The four axes along which five-in-a-row is checked.
///
/// Enumeration order is fixed; win detection resolves ties across axes
/// by taking the first qualifying axis in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Diagonal running down-right (SE)
    DiagSe,
    /// Diagonal running down-left (SW)
    DiagSw,
}

/// All axes in their fixed enumeration order
pub const AXES: [Axis; 4] = [Axis::Horizontal, Axis::Vertical, Axis::DiagSe, Axis::DiagSw];

/// Steps scanned on each side of the start cell. Five stones including
/// the start are a win, so four steps per side suffice.
pub const SCAN_REACH: i32 = 4;

impl Axis {
    /// Unit step (row delta, col delta) for the forward direction
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagSe => (1, 1),
            Axis::DiagSw => (1, -1),
        }
    }
}

/// Result of scanning one axis from a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Consecutive same-player stones including the start cell
    pub count: u8,
    /// Ends stopped by an opponent stone or the board edge (0, 1, or 2)
    pub blocked: u8,
}

/// Scan one axis from `pos` for `player`.
///
/// Each direction walks up to [`SCAN_REACH`] steps. A run that stops at
/// an empty cell (or exhausts the scan length) leaves that end open; an
/// opponent stone and the board edge both count as a blocked end.
///
/// The start cell itself is always counted, whether or not it actually
/// holds a `player` stone. Callers scan either from a placed stone or
/// from a hypothetical placement they have just made.
#[must_use]
pub fn scan(board: &Board, pos: Pos, player: Player, axis: Axis) -> LineScan {
    let (dr, dc) = axis.delta();
    let mut count = 1u8;
    let mut blocked = 0u8;

    for sign in [1, -1] {
        for k in 1..=SCAN_REACH {
            let r = i32::from(pos.row) + dr * k * sign;
            let c = i32::from(pos.col) + dc * k * sign;
            if !board.contains(r, c) {
                blocked += 1;
                break;
            }
            match board.get(Pos::new(r as u8, c as u8)) {
                Some(p) if p == player => count += 1,
                Some(_) => {
                    blocked += 1;
                    break;
                }
                None => break,
            }
        }
    }

    LineScan { count, blocked }
}

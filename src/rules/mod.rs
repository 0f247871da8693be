//! Game rules: axis scanning and win detection

pub mod line;
pub mod win;

pub use line::{scan, Axis, LineScan, AXES};
pub use win::{is_win_at, winning_run};

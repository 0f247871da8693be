//! Static board evaluation
//!
//! Sums the weight-table score of every placed stone over the four
//! axes, then folds in a large bonus when either side has an immediate
//! winning placement available. A zero-sum heuristic, not a provably
//! correct value function.

use crate::board::{Board, Player};
use crate::rules::line::{scan, AXES};
use crate::search::threat;

use super::cache::EvalCache;
use super::patterns::Weights;

/// Score `player`'s board presence.
///
/// Every stone of `player` contributes its line score on each axis.
/// Scanning from every stone means a run is counted once per stone it
/// contains, which makes longer runs weigh superlinearly; the weight
/// table is tuned for that.
#[must_use]
pub fn score_player(board: &Board, player: Player, weights: &Weights) -> i32 {
    let mut score = 0;
    for &(pos, owner) in board.history() {
        if owner != player {
            continue;
        }
        for axis in AXES {
            let line = scan(board, pos, player, axis);
            score += weights.line_score(line.count, line.blocked);
        }
    }
    score
}

/// Evaluate the board from `mover`'s perspective.
///
/// Returns `score_player(mover) - score_player(opponent)`, adjusted by
/// the immediate-threat bonus when either side could win with a single
/// placement. Positive favors `mover`. The threat probes place and
/// undo hypothetical stones, hence the `&mut Board`.
#[must_use]
pub fn evaluate(
    board: &mut Board,
    mover: Player,
    weights: &Weights,
    cache: &mut EvalCache,
) -> i32 {
    let digest = board.digest();
    if let Some(score) = cache.evaluation(digest, mover) {
        return score;
    }

    let opponent = mover.opponent();
    let mut score = score_player(board, mover, weights) - score_player(board, opponent, weights);

    if threat::immediate_win(board, mover, cache).is_some() {
        score += weights.immediate_threat;
    }
    if threat::immediate_win(board, opponent, cache).is_some() {
        score -= weights.immediate_threat;
    }

    cache.put_evaluation(digest, mover, score);
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn defaults() -> Weights {
        Weights::default()
    }

    #[test]
    fn empty_board_scores_zero() {
        let mut board = Board::new(10);
        let mut cache = EvalCache::new();
        assert_eq!(evaluate(&mut board, Player::One, &defaults(), &mut cache), 0);
    }

    #[test]
    fn lone_stone_scores_zero() {
        let board = {
            let mut b = Board::new(10);
            b.place(Pos::new(5, 5), Player::One);
            b
        };
        assert_eq!(score_player(&board, Player::One, &defaults()), 0);
    }

    #[test]
    fn open_two_scores_per_stone() {
        let mut board = Board::new(10);
        board.place(Pos::new(5, 4), Player::One);
        board.place(Pos::new(5, 5), Player::One);
        // Each of the two stones sees the open two on the horizontal axis
        assert_eq!(
            score_player(&board, Player::One, &defaults()),
            2 * defaults().open_two
        );
    }

    #[test]
    fn mover_advantage_is_positive() {
        let mut board = Board::new(10);
        for c in 3..6 {
            board.place(Pos::new(5, c), Player::One);
        }
        board.place(Pos::new(0, 0), Player::Two);

        let mut cache = EvalCache::new();
        let score = evaluate(&mut board, Player::One, &defaults(), &mut cache);
        assert!(score > 0, "open three should dominate, got {score}");
    }

    #[test]
    fn perspectives_are_zero_sum_without_threats() {
        let mut board = Board::new(10);
        board.place(Pos::new(4, 4), Player::One);
        board.place(Pos::new(4, 5), Player::One);
        board.place(Pos::new(7, 2), Player::Two);
        board.place(Pos::new(8, 2), Player::Two);

        let mut cache = EvalCache::new();
        let one = evaluate(&mut board, Player::One, &defaults(), &mut cache);
        let two = evaluate(&mut board, Player::Two, &defaults(), &mut cache);
        assert_eq!(one, -two);
    }

    #[test]
    fn immediate_threat_bonus_applies() {
        let weights = defaults();
        // Four in a row with an open end: one placement wins
        let mut board = Board::new(10);
        for c in 2..6 {
            board.place(Pos::new(5, c), Player::One);
        }

        let mut cache = EvalCache::new();
        let with_threat = evaluate(&mut board, Player::One, &weights, &mut cache);
        assert!(
            with_threat >= weights.immediate_threat,
            "threat bonus missing from {with_threat}"
        );

        // Same position seen by the defender is symmetric and negative
        let mut cache = EvalCache::new();
        let against = evaluate(&mut board, Player::Two, &weights, &mut cache);
        assert!(against <= -weights.immediate_threat);
    }

    #[test]
    fn evaluation_is_cached_by_digest() {
        let mut board = Board::new(10);
        board.place(Pos::new(5, 5), Player::One);
        let mut cache = EvalCache::new();

        let first = evaluate(&mut board, Player::One, &defaults(), &mut cache);
        assert_eq!(
            cache.evaluation(board.digest(), Player::One),
            Some(first)
        );
        let second = evaluate(&mut board, Player::One, &defaults(), &mut cache);
        assert_eq!(first, second);
    }

    #[test]
    fn board_restored_after_evaluation() {
        let mut board = Board::new(10);
        for c in 2..6 {
            board.place(Pos::new(5, c), Player::One);
        }
        let digest = board.digest();
        let stones = board.stone_count();

        let mut cache = EvalCache::new();
        let _ = evaluate(&mut board, Player::One, &defaults(), &mut cache);
        assert_eq!(board.digest(), digest);
        assert_eq!(board.stone_count(), stones);
    }
}

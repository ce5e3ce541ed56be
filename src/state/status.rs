//! Game-status evaluation: a pure function deriving the current round, the
//! game-over flag, and the winner from a board snapshot.

use uuid::Uuid;

use crate::state::board::{Board, ScoreCondition};

/// Ephemeral summary derived from a board snapshot. Recomputed on every
/// observation, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    /// Whether one of the board's end conditions has triggered.
    pub is_game_over: bool,
    /// Winning participant, present only when the game is over.
    pub winner: Option<Uuid>,
    /// Highest round number entered by anyone, 0 when no scores exist.
    pub current_round: u32,
    /// `number_of_rounds - current_round`, unclamped (zero or negative once
    /// the cap is reached or exceeded). `None` when no round cap is set.
    pub remaining_rounds: Option<i64>,
}

/// How totals are compared against the configured target score.
///
/// The historical scoring behaviour ends the game on `total >= target` under
/// either win condition, which is surprising for lowest-wins boards. Both
/// readings are kept explicit here; [`evaluate`] uses the historical one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TargetPolicy {
    /// A total reaching or exceeding the target ends the game regardless of
    /// the win condition. Matches games like Hearts or Oh Hell where a
    /// climbing total ends play even though the lowest total wins.
    #[default]
    ThresholdReached,
    /// The comparison follows the win direction: `>= target` for
    /// highest-wins, `<= target` for lowest-wins.
    DirectionAware,
}

impl TargetPolicy {
    fn crossed(self, condition: ScoreCondition, total: i32, target: i32) -> bool {
        match (self, condition) {
            (Self::ThresholdReached, _) => total >= target,
            (Self::DirectionAware, ScoreCondition::HighestWins) => total >= target,
            (Self::DirectionAware, ScoreCondition::LowestWins) => total <= target,
        }
    }
}

/// Evaluate a board snapshot under the default [`TargetPolicy`].
///
/// Returns `None` for an absent board or an empty roster: status is unknown
/// without players, which callers must treat as a neutral state rather than
/// an error. Never panics on a well-formed board, including boards with no
/// scores and boards with no end condition at all.
pub fn evaluate(board: Option<&Board>) -> Option<GameStatus> {
    evaluate_with_policy(board, TargetPolicy::default())
}

/// Evaluate a board snapshot with an explicit target-threshold policy.
pub fn evaluate_with_policy(board: Option<&Board>, policy: TargetPolicy) -> Option<GameStatus> {
    let board = board?;
    if board.participants.is_empty() {
        return None;
    }

    let current_round = board.current_round();

    // Round-based end: the cap must be reached and the final round complete,
    // meaning every participant has an entry for exactly that round.
    let mut is_game_over = false;
    if let Some(rounds) = board.number_of_rounds
        && rounds > 0
        && current_round >= rounds
    {
        let complete = board
            .participants
            .values()
            .filter(|participant| participant.score_for_round(rounds).is_some())
            .count();
        is_game_over = complete == board.participants.len();
    }

    // Target-based end. Skipped once the round cap already ended the game;
    // the outcome is identical either way. An unset condition never
    // triggers it.
    if !is_game_over
        && let (Some(target), Some(condition)) = (board.target_score, board.score_condition)
    {
        is_game_over = board
            .participants
            .values()
            .any(|participant| policy.crossed(condition, participant.total_score(), target));
    }

    // Winner: first of the full standings. The sort is stable, so equal
    // totals resolve to the earliest-added participant.
    let winner = if is_game_over {
        board.standings().first().map(|&(id, _)| id)
    } else {
        None
    };

    let remaining_rounds = board
        .number_of_rounds
        .map(|rounds| i64::from(rounds) - i64::from(current_round));

    Some(GameStatus {
        is_game_over,
        winner,
        current_round,
        remaining_rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new("Friday night".into(), None, None, None, 1)
    }

    fn board_with_rounds(rounds: u32) -> Board {
        Board::new("Friday night".into(), None, None, Some(rounds), 1)
    }

    fn board_with_target(target: i32, condition: ScoreCondition) -> Board {
        Board::new("Friday night".into(), Some(target), Some(condition), None, 1)
    }

    #[test]
    fn absent_board_yields_none() {
        assert_eq!(evaluate(None), None);
    }

    #[test]
    fn empty_roster_yields_none() {
        let board = board();
        assert_eq!(evaluate(Some(&board)), None);
    }

    #[test]
    fn no_scores_anywhere_means_round_zero() {
        let mut board = board();
        board.add_participant("Alice".into());

        let status = evaluate(Some(&board)).unwrap();
        assert_eq!(status.current_round, 0);
        assert!(!status.is_game_over);
        assert_eq!(status.winner, None);
        assert_eq!(status.remaining_rounds, None);
    }

    #[test]
    fn current_round_tracks_the_highest_entry() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());
        board.record_score(alice, 1, 10).unwrap();
        board.record_score(bob, 1, 5).unwrap();

        assert_eq!(evaluate(Some(&board)).unwrap().current_round, 1);

        // A higher-numbered entry from any single participant raises it.
        board.record_score(bob, 4, 2).unwrap();
        assert_eq!(evaluate(Some(&board)).unwrap().current_round, 4);
    }

    #[test]
    fn no_end_condition_never_finishes() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());
        for round in 1..=20 {
            board.record_score(alice, round, 100).unwrap();
        }

        let status = evaluate(Some(&board)).unwrap();
        assert!(!status.is_game_over);
        assert_eq!(status.winner, None);
    }

    #[test]
    fn round_cap_requires_a_complete_final_round() {
        let mut board = board_with_rounds(3);
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());

        board.record_score(alice, 3, 12).unwrap();
        board.record_score(bob, 2, 8).unwrap();

        // Alice reached the cap but Bob has no round-3 entry yet.
        let status = evaluate(Some(&board)).unwrap();
        assert_eq!(status.current_round, 3);
        assert!(!status.is_game_over);
        assert_eq!(status.remaining_rounds, Some(0));

        board.record_score(bob, 3, 9).unwrap();
        let status = evaluate(Some(&board)).unwrap();
        assert!(status.is_game_over);
        // Totals: Alice 12, Bob 17, condition unset sorts descending.
        assert_eq!(status.winner, Some(bob));
    }

    #[test]
    fn intermediate_gaps_do_not_block_the_round_cap() {
        // Only the final round has to be complete; earlier rounds may stay
        // unevenly filled.
        let mut board = board_with_rounds(2);
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());

        board.record_score(alice, 1, 10).unwrap();
        board.record_score(alice, 2, 20).unwrap();
        board.record_score(bob, 2, 15).unwrap();

        let status = evaluate(Some(&board)).unwrap();
        assert!(status.is_game_over);
        assert_eq!(status.winner, Some(alice));
    }

    #[test]
    fn target_reached_ends_highest_wins() {
        let mut board = board_with_target(50, ScoreCondition::HighestWins);
        let alice = board.add_participant("Alice".into());
        board.add_participant("Bob".into());

        board.record_score(alice, 1, 49).unwrap();
        assert!(!evaluate(Some(&board)).unwrap().is_game_over);

        board.record_score(alice, 2, 1).unwrap();
        let status = evaluate(Some(&board)).unwrap();
        assert!(status.is_game_over);
        assert_eq!(status.winner, Some(alice));
    }

    #[test]
    fn target_reached_ends_lowest_wins_under_default_policy() {
        // Historical behaviour: the climbing total ends the game even though
        // the lowest total wins, like busting past 100 in Hearts.
        let mut board = board_with_target(100, ScoreCondition::LowestWins);
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());

        board.record_score(alice, 1, 100).unwrap();
        board.record_score(bob, 1, 30).unwrap();

        let status = evaluate(Some(&board)).unwrap();
        assert!(status.is_game_over);
        // Alice busted; Bob holds the lowest total and wins.
        assert_eq!(status.winner, Some(bob));
    }

    #[test]
    fn direction_aware_policy_inverts_lowest_wins() {
        let mut board = board_with_target(10, ScoreCondition::LowestWins);
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());

        board.record_score(alice, 1, 40).unwrap();
        board.record_score(bob, 1, 25).unwrap();

        // Nobody is at or below the target yet.
        let status = evaluate_with_policy(Some(&board), TargetPolicy::DirectionAware).unwrap();
        assert!(!status.is_game_over);

        board.record_score(bob, 2, -15).unwrap();
        let status = evaluate_with_policy(Some(&board), TargetPolicy::DirectionAware).unwrap();
        assert!(status.is_game_over);
        assert_eq!(status.winner, Some(bob));
    }

    #[test]
    fn unset_condition_disables_target_end() {
        let mut board = board();
        board.target_score = Some(10);
        let alice = board.add_participant("Alice".into());
        board.record_score(alice, 1, 50).unwrap();

        assert!(!evaluate(Some(&board)).unwrap().is_game_over);
    }

    #[test]
    fn winner_is_lowest_total_under_lowest_wins() {
        let mut board = board_with_target(30, ScoreCondition::LowestWins);
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());
        let carol = board.add_participant("Carol".into());

        board.record_score(alice, 1, 30).unwrap();
        board.record_score(bob, 1, 10).unwrap();
        board.record_score(carol, 1, 20).unwrap();

        let status = evaluate(Some(&board)).unwrap();
        assert!(status.is_game_over);
        assert_eq!(status.winner, Some(bob));
    }

    #[test]
    fn tied_totals_resolve_to_the_earliest_added_participant() {
        let mut board = board_with_rounds(1);
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());

        board.record_score(alice, 1, 10).unwrap();
        board.record_score(bob, 1, 10).unwrap();

        let status = evaluate(Some(&board)).unwrap();
        assert!(status.is_game_over);
        assert_eq!(status.winner, Some(alice));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let mut board = board_with_rounds(2);
        let alice = board.add_participant("Alice".into());
        board.record_score(alice, 1, 10).unwrap();

        assert_eq!(evaluate(Some(&board)), evaluate(Some(&board)));
    }

    #[test]
    fn two_rounds_complete_game_picks_highest_by_default() {
        // End-to-end example: cap of 2 rounds, no target, condition unset.
        let mut board = board_with_rounds(2);
        let alice = board.add_participant("A".into());
        let bob = board.add_participant("B".into());

        board.record_score(alice, 1, 10).unwrap();
        board.record_score(alice, 2, 20).unwrap();
        board.record_score(bob, 1, 5).unwrap();
        board.record_score(bob, 2, 15).unwrap();

        let status = evaluate(Some(&board)).unwrap();
        assert_eq!(status.current_round, 2);
        assert!(status.is_game_over);
        assert_eq!(status.winner, Some(alice));
        assert_eq!(status.remaining_rounds, Some(0));
    }

    #[test]
    fn two_rounds_partial_final_round_is_not_over() {
        // Same board before B's round-2 entry exists.
        let mut board = board_with_rounds(2);
        let alice = board.add_participant("A".into());
        let bob = board.add_participant("B".into());

        board.record_score(alice, 1, 10).unwrap();
        board.record_score(alice, 2, 20).unwrap();
        board.record_score(bob, 1, 5).unwrap();

        let status = evaluate(Some(&board)).unwrap();
        assert_eq!(status.current_round, 2);
        assert!(!status.is_game_over);
        assert_eq!(status.winner, None);
        assert_eq!(status.remaining_rounds, Some(0));
    }

    #[test]
    fn remaining_rounds_go_negative_past_the_cap() {
        let mut board = board_with_rounds(2);
        let alice = board.add_participant("Alice".into());
        board.record_score(alice, 5, 1).unwrap();

        let status = evaluate(Some(&board)).unwrap();
        assert_eq!(status.remaining_rounds, Some(-3));
    }
}

use std::time::SystemTime;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Direction a board's target score is played towards. Decides both the
/// end-of-game threshold and the standings sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreCondition {
    /// The highest total wins.
    HighestWins,
    /// The lowest total wins.
    LowestWins,
}

/// A single recorded score for one participant in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Stable identifier of the entry.
    pub id: Uuid,
    /// 1-based round number. Unique within one participant's entries.
    pub round_number: u32,
    /// Points recorded for that round (may be negative).
    pub score_value: i32,
}

/// A player tracked on a board. The id lives as the key of the board roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Display name chosen for the player.
    pub name: String,
    /// Per-round entries. Round numbers are not required to be contiguous.
    pub scores: Vec<ScoreEntry>,
}

impl Participant {
    fn new(name: String) -> Self {
        Self {
            name,
            scores: Vec::new(),
        }
    }

    /// Derived total for this participant. The entries are the single source
    /// of truth; no cached copy of this value is ever authoritative.
    pub fn total_score(&self) -> i32 {
        self.scores.iter().map(|entry| entry.score_value).sum()
    }

    /// Entry recorded for `round_number`, if any.
    pub fn score_for_round(&self, round_number: u32) -> Option<&ScoreEntry> {
        self.scores
            .iter()
            .find(|entry| entry.round_number == round_number)
    }
}

/// Whether recording a score appended a new entry or overwrote an existing
/// round in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreUpsert {
    /// A new entry was appended for a round the participant had not played.
    Created,
    /// The participant already had the round; its value was overwritten.
    Updated,
}

/// One row of the scoreboard grid: a round number with every participant's
/// score for it, `None` where no entry exists yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRow {
    /// 1-based round the row describes.
    pub round_number: u32,
    /// Score per participant, in roster order.
    pub scores: IndexMap<Uuid, Option<i32>>,
}

/// A scoreboard instance: participants, their per-round scores, and the
/// optional end conditions consumed by [`crate::state::status::evaluate`].
#[derive(Debug, Clone)]
pub struct Board {
    /// Primary key of the board.
    pub id: Uuid,
    /// Display name of the game.
    pub name: String,
    /// Total that ends the game when crossed. Only meaningful together with
    /// `score_condition`.
    pub target_score: Option<i32>,
    /// Win direction for the target score. Unset disables target-based end.
    pub score_condition: Option<ScoreCondition>,
    /// Hard cap on rounds. Unset disables round-based end.
    pub number_of_rounds: Option<u32>,
    /// Position of the board in list views.
    pub display_order: u32,
    /// Creation timestamp.
    pub created_at: SystemTime,
    /// Last time the board was mutated.
    pub updated_at: SystemTime,
    /// Roster in insertion order. That order doubles as the tie-break when
    /// totals are equal.
    pub participants: IndexMap<Uuid, Participant>,
}

impl Board {
    /// Build a fresh board with an empty roster and both timestamps set to
    /// now.
    pub fn new(
        name: String,
        target_score: Option<i32>,
        score_condition: Option<ScoreCondition>,
        number_of_rounds: Option<u32>,
        display_order: u32,
    ) -> Self {
        let timestamp = SystemTime::now();

        Self {
            id: Uuid::new_v4(),
            name,
            target_score,
            score_condition,
            number_of_rounds,
            display_order,
            created_at: timestamp,
            updated_at: timestamp,
            participants: IndexMap::new(),
        }
    }

    /// Refresh `updated_at` after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = SystemTime::now();
    }

    /// Append a participant to the roster and return its new id.
    pub fn add_participant(&mut self, name: String) -> Uuid {
        let id = Uuid::new_v4();
        self.participants.insert(id, Participant::new(name));
        id
    }

    /// Remove a participant, keeping the relative order of the remaining
    /// roster. Returns false when the id is unknown.
    pub fn remove_participant(&mut self, id: Uuid) -> bool {
        self.participants.shift_remove(&id).is_some()
    }

    /// Record a score for `participant_id`. When the participant already has
    /// an entry for `round_number` its value is overwritten in place, never
    /// duplicated. Returns `None` when the participant is unknown.
    pub fn record_score(
        &mut self,
        participant_id: Uuid,
        round_number: u32,
        score_value: i32,
    ) -> Option<(ScoreUpsert, ScoreEntry)> {
        let participant = self.participants.get_mut(&participant_id)?;

        if let Some(entry) = participant
            .scores
            .iter_mut()
            .find(|entry| entry.round_number == round_number)
        {
            entry.score_value = score_value;
            return Some((ScoreUpsert::Updated, entry.clone()));
        }

        let entry = ScoreEntry {
            id: Uuid::new_v4(),
            round_number,
            score_value,
        };
        participant.scores.push(entry.clone());
        Some((ScoreUpsert::Created, entry))
    }

    /// Highest round number entered by anyone, 0 when no entries exist.
    ///
    /// This is "the furthest round anyone reached", not "the round everyone
    /// completed"; rounds can be unevenly filled.
    pub fn current_round(&self) -> u32 {
        self.participants
            .values()
            .flat_map(|participant| participant.scores.iter().map(|entry| entry.round_number))
            .max()
            .unwrap_or(0)
    }

    /// Every participant with its derived total, stable-sorted ascending for
    /// [`ScoreCondition::LowestWins`] and descending otherwise (an unset
    /// condition sorts descending). Equal totals keep roster order.
    pub fn standings(&self) -> Vec<(Uuid, i32)> {
        let mut totals: Vec<(Uuid, i32)> = self
            .participants
            .iter()
            .map(|(id, participant)| (*id, participant.total_score()))
            .collect();

        match self.score_condition {
            Some(ScoreCondition::LowestWins) => totals.sort_by_key(|&(_, total)| total),
            _ => totals.sort_by_key(|&(_, total)| std::cmp::Reverse(total)),
        }

        totals
    }

    /// Scoreboard grid: one row per round from 1 to the current round, every
    /// participant present in every row.
    pub fn round_rows(&self) -> Vec<RoundRow> {
        (1..=self.current_round())
            .map(|round_number| RoundRow {
                round_number,
                scores: self
                    .participants
                    .iter()
                    .map(|(id, participant)| {
                        (
                            *id,
                            participant
                                .score_for_round(round_number)
                                .map(|entry| entry.score_value),
                        )
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new("Test board".into(), None, None, None, 1)
    }

    #[test]
    fn record_score_overwrites_same_round_in_place() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());

        let (first, entry) = board.record_score(alice, 1, 10).unwrap();
        assert_eq!(first, ScoreUpsert::Created);

        let (second, updated) = board.record_score(alice, 1, 25).unwrap();
        assert_eq!(second, ScoreUpsert::Updated);
        assert_eq!(updated.id, entry.id);
        assert_eq!(updated.score_value, 25);

        let participant = &board.participants[&alice];
        assert_eq!(participant.scores.len(), 1);
        assert_eq!(participant.total_score(), 25);
    }

    #[test]
    fn record_score_for_unknown_participant_is_none() {
        let mut board = board();
        assert!(board.record_score(Uuid::new_v4(), 1, 10).is_none());
    }

    #[test]
    fn total_score_sums_all_rounds() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());
        board.record_score(alice, 1, 10).unwrap();
        board.record_score(alice, 3, -4).unwrap();

        assert_eq!(board.participants[&alice].total_score(), 6);
    }

    #[test]
    fn current_round_is_max_over_all_participants() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());

        assert_eq!(board.current_round(), 0);

        board.record_score(alice, 1, 10).unwrap();
        board.record_score(bob, 3, 5).unwrap();
        assert_eq!(board.current_round(), 3);
    }

    #[test]
    fn standings_sort_ascending_for_lowest_wins() {
        let mut board = board();
        board.score_condition = Some(ScoreCondition::LowestWins);
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());
        let carol = board.add_participant("Carol".into());
        board.record_score(alice, 1, 30).unwrap();
        board.record_score(bob, 1, 10).unwrap();
        board.record_score(carol, 1, 20).unwrap();

        let order: Vec<Uuid> = board.standings().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![bob, carol, alice]);
    }

    #[test]
    fn standings_keep_roster_order_on_ties() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());
        board.record_score(alice, 1, 10).unwrap();
        board.record_score(bob, 1, 10).unwrap();

        let order: Vec<Uuid> = board.standings().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![alice, bob]);
    }

    #[test]
    fn remove_participant_preserves_roster_order() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());
        let carol = board.add_participant("Carol".into());

        assert!(board.remove_participant(bob));
        assert!(!board.remove_participant(bob));

        let roster: Vec<Uuid> = board.participants.keys().copied().collect();
        assert_eq!(roster, vec![alice, carol]);
    }

    #[test]
    fn round_rows_fill_missing_entries_with_none() {
        let mut board = board();
        let alice = board.add_participant("Alice".into());
        let bob = board.add_participant("Bob".into());
        board.record_score(alice, 1, 10).unwrap();
        board.record_score(alice, 3, 7).unwrap();
        board.record_score(bob, 2, 5).unwrap();

        let rows = board.round_rows();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].round_number, 1);
        assert_eq!(rows[0].scores[&alice], Some(10));
        assert_eq!(rows[0].scores[&bob], None);

        assert_eq!(rows[1].scores[&alice], None);
        assert_eq!(rows[1].scores[&bob], Some(5));

        assert_eq!(rows[2].scores[&alice], Some(7));
        assert_eq!(rows[2].scores[&bob], None);
    }
}

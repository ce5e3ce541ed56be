use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    dto::{
        format_system_time,
        status::GameStatusSummary,
        validation::{validate_board_name, validate_participant_name},
    },
    state::board::{Board, Participant, ScoreCondition, ScoreEntry},
};

/// Payload used to create a new board.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBoardRequest {
    /// Display name of the game.
    #[validate(custom(function = validate_board_name))]
    pub name: String,
    /// Total that ends the game when crossed. Requires `score_condition` to
    /// have an effect.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub target_score: Option<i32>,
    /// Win direction for the target score.
    #[serde(default)]
    pub score_condition: Option<ScoreCondition>,
    /// Hard cap on rounds.
    #[serde(default)]
    #[validate(range(min = 1))]
    pub number_of_rounds: Option<u32>,
}

/// Payload used to update a board's name or end conditions.
///
/// The three end-condition fields are clearable: omitting a field leaves the
/// stored value unchanged, while an explicit `null` clears it.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBoardRequest {
    /// New display name, when renaming.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    /// New target score; `null` disables target-based end.
    pub target_score: Option<Option<i32>>,
    #[serde(default)]
    #[schema(value_type = Option<ScoreCondition>)]
    /// New win direction; `null` unsets it.
    pub score_condition: Option<Option<ScoreCondition>>,
    #[serde(default)]
    #[schema(value_type = Option<u32>)]
    /// New round cap; `null` disables round-based end.
    pub number_of_rounds: Option<Option<u32>>,
}

impl Validate for UpdateBoardRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(ref name) = self.name
            && let Err(e) = validate_board_name(name)
        {
            errors.add("name", e);
        }

        if let Some(Some(target)) = self.target_score
            && target < 1
        {
            errors.add("target_score", positive_error("target_score_positive"));
        }

        if let Some(Some(rounds)) = self.number_of_rounds
            && rounds < 1
        {
            errors.add("number_of_rounds", positive_error("number_of_rounds_positive"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn positive_error(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some("Value must be at least 1".into());
    err
}

/// Payload used to append a participant to a board's roster.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddParticipantRequest {
    /// Display name of the new participant.
    #[validate(custom(function = validate_participant_name))]
    pub name: String,
}

/// Payload used to record (or correct) a score for one round.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RecordScoreRequest {
    /// 1-based round the score belongs to. Re-sending an already recorded
    /// round overwrites its value in place.
    #[validate(range(min = 1))]
    pub round_number: u32,
    /// Points for that round (may be negative).
    pub score_value: i32,
}

/// Public projection of a single score entry.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ScoreEntrySummary {
    /// Stable identifier of the entry.
    pub id: Uuid,
    /// 1-based round the score belongs to.
    pub round_number: u32,
    /// Points recorded for that round.
    pub score_value: i32,
}

/// Public projection of a participant with its derived total.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ParticipantSummary {
    /// Identifier of the participant within its board.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Derived sum of all entries. Never stored.
    pub total_score: i32,
    /// Per-round entries in recording order.
    pub scores: Vec<ScoreEntrySummary>,
}

/// Compact board projection used by list views.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct BoardListItem {
    /// Primary key of the board.
    pub id: Uuid,
    /// Display name of the game.
    pub name: String,
    /// Number of participants on the roster.
    pub participant_count: usize,
    /// Whether one of the end conditions has triggered.
    pub is_game_over: bool,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last mutation timestamp, RFC 3339.
    pub updated_at: String,
}

/// Full board projection returned by the detail route, including the derived
/// game status.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct BoardSummary {
    /// Primary key of the board.
    pub id: Uuid,
    /// Display name of the game.
    pub name: String,
    /// Configured target score, if any.
    pub target_score: Option<i32>,
    /// Configured win direction, if any.
    pub score_condition: Option<ScoreCondition>,
    /// Configured round cap, if any.
    pub number_of_rounds: Option<u32>,
    /// Position of the board in list views.
    pub display_order: u32,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last mutation timestamp, RFC 3339.
    pub updated_at: String,
    /// Roster in insertion order.
    pub participants: Vec<ParticipantSummary>,
    /// Derived status, absent while the roster is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatusSummary>,
}

/// Response returned after recording a score: the updated participant, the
/// touched entry, and the freshly evaluated status.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct ScoreRecordedResponse {
    /// Board the score was recorded on.
    pub board_id: Uuid,
    /// Updated projection of the participant.
    pub participant: ParticipantSummary,
    /// The created or overwritten entry.
    pub entry: ScoreEntrySummary,
    /// Status evaluated after the mutation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<GameStatusSummary>,
}

impl From<&ScoreEntry> for ScoreEntrySummary {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            id: entry.id,
            round_number: entry.round_number,
            score_value: entry.score_value,
        }
    }
}

impl From<(Uuid, &Participant)> for ParticipantSummary {
    fn from((id, participant): (Uuid, &Participant)) -> Self {
        Self {
            id,
            name: participant.name.clone(),
            total_score: participant.total_score(),
            scores: participant.scores.iter().map(Into::into).collect(),
        }
    }
}

impl From<&Board> for BoardListItem {
    fn from(board: &Board) -> Self {
        let is_game_over = crate::state::status::evaluate(Some(board))
            .is_some_and(|status| status.is_game_over);

        Self {
            id: board.id,
            name: board.name.clone(),
            participant_count: board.participants.len(),
            is_game_over,
            created_at: format_system_time(board.created_at),
            updated_at: format_system_time(board.updated_at),
        }
    }
}

impl From<&Board> for BoardSummary {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id,
            name: board.name.clone(),
            target_score: board.target_score,
            score_condition: board.score_condition,
            number_of_rounds: board.number_of_rounds,
            display_order: board.display_order,
            created_at: format_system_time(board.created_at),
            updated_at: format_system_time(board.updated_at),
            participants: board
                .participants
                .iter()
                .map(|(id, participant)| ParticipantSummary::from((*id, participant)))
                .collect(),
            status: GameStatusSummary::from_board(board),
        }
    }
}

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    dto::board::ParticipantSummary,
    state::{
        board::Board,
        status::{self, GameStatus},
    },
};

/// Public projection of the evaluated game status, with the winner resolved
/// to a full participant summary.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct GameStatusSummary {
    /// Whether one of the board's end conditions has triggered.
    pub is_game_over: bool,
    /// Winning participant, present only when the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<ParticipantSummary>,
    /// Highest round number entered by anyone.
    pub current_round: u32,
    /// Rounds left before the cap, unclamped. Absent without a cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_rounds: Option<i64>,
}

impl GameStatusSummary {
    /// Evaluate `board` and project the result, `None` while the roster is
    /// empty (status unknown, not an error).
    pub fn from_board(board: &Board) -> Option<Self> {
        status::evaluate(Some(board)).map(|status| Self::project(board, status))
    }

    /// Resolve an already evaluated status against its board.
    pub fn project(board: &Board, status: GameStatus) -> Self {
        let winner = status.winner.and_then(|id| {
            board
                .participants
                .get(&id)
                .map(|participant| ParticipantSummary::from((id, participant)))
        });

        Self {
            is_game_over: status.is_game_over,
            winner,
            current_round: status.current_round,
            remaining_rounds: status.remaining_rounds,
        }
    }
}

/// Envelope returned by the status route. `status` is `null` while the board
/// has no participants.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct GameStatusResponse {
    /// Evaluated status, when one is derivable.
    pub status: Option<GameStatusSummary>,
}

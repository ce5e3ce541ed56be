use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::{
    board::{BoardListItem, BoardSummary, ParticipantSummary, ScoreEntrySummary},
    status::GameStatusSummary,
};

#[derive(Clone, Debug)]
/// Dispatched payload carried across the SSE channel.
pub struct ServerEvent {
    /// Optional SSE event name.
    pub event: Option<String>,
    /// Serialized data field.
    pub data: String,
}

impl ServerEvent {
    /// Convenience wrapper that serialises `payload` into the SSE data field.
    pub fn json<E, T>(event: E, payload: &T) -> serde_json::Result<Self>
    where
        E: Into<Option<String>>,
        T: Serialize,
    {
        Ok(Self {
            event: event.into(),
            data: serde_json::to_string(payload)?,
        })
    }

    /// Build a plain-text event.
    pub fn new(event: Option<String>, data: String) -> Self {
        Self { event, data }
    }
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a board has been created.
pub struct BoardCreatedEvent {
    /// List projection of the new board.
    pub board: BoardListItem,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a board's name or end conditions changed.
pub struct BoardUpdatedEvent {
    /// Full projection of the updated board.
    pub board: BoardSummary,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a board has been deleted.
pub struct BoardDeletedEvent {
    /// Identifier of the removed board.
    pub board_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a participant joined a board.
pub struct ParticipantAddedEvent {
    /// Board the participant joined.
    pub board_id: Uuid,
    /// Projection of the new participant.
    pub participant: ParticipantSummary,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a participant left a board.
pub struct ParticipantRemovedEvent {
    /// Board the participant was removed from.
    pub board_id: Uuid,
    /// Identifier of the removed participant.
    pub participant_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast when a score has been recorded or corrected.
pub struct ScoreRecordedEvent {
    /// Board the score belongs to.
    pub board_id: Uuid,
    /// Updated projection of the participant.
    pub participant: ParticipantSummary,
    /// The created or overwritten entry.
    pub entry: ScoreEntrySummary,
}

#[derive(Debug, Serialize, ToSchema)]
/// Broadcast once when a mutation flips a board to game over.
pub struct GameOverEvent {
    /// Board whose game just ended.
    pub board_id: Uuid,
    /// Final evaluated status, winner included.
    pub status: GameStatusSummary,
}

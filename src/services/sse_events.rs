use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::{
    dto::{
        board::{BoardListItem, BoardSummary, ParticipantSummary, ScoreRecordedResponse},
        sse::{
            BoardCreatedEvent, BoardDeletedEvent, BoardUpdatedEvent, GameOverEvent,
            ParticipantAddedEvent, ParticipantRemovedEvent, ScoreRecordedEvent, ServerEvent,
        },
        status::GameStatusSummary,
    },
    state::SharedState,
};

const EVENT_BOARD_CREATED: &str = "board.created";
const EVENT_BOARD_UPDATED: &str = "board.updated";
const EVENT_BOARD_DELETED: &str = "board.deleted";
const EVENT_PARTICIPANT_ADDED: &str = "participant.added";
const EVENT_PARTICIPANT_REMOVED: &str = "participant.removed";
const EVENT_SCORE_RECORDED: &str = "score.recorded";
const EVENT_GAME_OVER: &str = "game.over";

/// Broadcast the list projection of a freshly created board.
pub fn broadcast_board_created(state: &SharedState, board: BoardListItem) {
    let payload = BoardCreatedEvent { board };
    send_event(state, EVENT_BOARD_CREATED, &payload);
}

/// Broadcast the full projection of an updated board.
pub fn broadcast_board_updated(state: &SharedState, board: BoardSummary) {
    let payload = BoardUpdatedEvent { board };
    send_event(state, EVENT_BOARD_UPDATED, &payload);
}

/// Broadcast that a board has been deleted.
pub fn broadcast_board_deleted(state: &SharedState, board_id: Uuid) {
    let payload = BoardDeletedEvent { board_id };
    send_event(state, EVENT_BOARD_DELETED, &payload);
}

/// Broadcast that a participant joined a board.
pub fn broadcast_participant_added(
    state: &SharedState,
    board_id: Uuid,
    participant: ParticipantSummary,
) {
    let payload = ParticipantAddedEvent {
        board_id,
        participant,
    };
    send_event(state, EVENT_PARTICIPANT_ADDED, &payload);
}

/// Broadcast that a participant left a board.
pub fn broadcast_participant_removed(state: &SharedState, board_id: Uuid, participant_id: Uuid) {
    let payload = ParticipantRemovedEvent {
        board_id,
        participant_id,
    };
    send_event(state, EVENT_PARTICIPANT_REMOVED, &payload);
}

/// Broadcast a recorded or corrected score with its updated participant.
pub fn broadcast_score_recorded(state: &SharedState, response: &ScoreRecordedResponse) {
    let payload = ScoreRecordedEvent {
        board_id: response.board_id,
        participant: response.participant.clone(),
        entry: response.entry.clone(),
    };
    send_event(state, EVENT_SCORE_RECORDED, &payload);
}

/// Broadcast the final status once a mutation flips a board to game over.
pub fn broadcast_game_over(state: &SharedState, board_id: Uuid, status: GameStatusSummary) {
    let payload = GameOverEvent { board_id, status };
    send_event(state, EVENT_GAME_OVER, &payload);
}

fn send_event(state: &SharedState, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => state.events().broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize SSE payload"),
    }
}

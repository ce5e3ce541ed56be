//! Business logic powering the board REST routes. These helpers coordinate
//! in-memory state mutations, status evaluation, and SSE broadcasts.

use uuid::Uuid;

use crate::{
    dto::{
        board::{
            AddParticipantRequest, BoardListItem, BoardSummary, CreateBoardRequest,
            ParticipantSummary, RecordScoreRequest, ScoreEntrySummary, ScoreRecordedResponse,
            UpdateBoardRequest,
        },
        rounds::RoundRowDto,
        status::{GameStatusResponse, GameStatusSummary},
    },
    error::ServiceError,
    services::sse_events,
    state::{SharedState, board::Board, status},
};

/// Return every board as a list projection, ordered by display position.
pub fn list_boards(state: &SharedState) -> Vec<BoardListItem> {
    let mut boards = state.boards_snapshot();
    boards.sort_by_key(|board| board.display_order);
    boards.iter().map(Into::into).collect()
}

/// Create a fresh board and broadcast its list projection.
pub fn create_board(
    state: &SharedState,
    request: CreateBoardRequest,
) -> Result<BoardSummary, ServiceError> {
    let CreateBoardRequest {
        name,
        target_score,
        score_condition,
        number_of_rounds,
    } = request;

    let board = Board::new(
        name.trim().to_string(),
        target_score,
        score_condition,
        number_of_rounds,
        state.claim_display_order(),
    );

    let summary = BoardSummary::from(&board);
    let item = BoardListItem::from(&board);
    state.insert_board(board);

    sse_events::broadcast_board_created(state, item);
    Ok(summary)
}

/// Full projection of one board, derived status included.
pub fn get_board(state: &SharedState, id: Uuid) -> Result<BoardSummary, ServiceError> {
    state.with_board(id, |board| Ok(BoardSummary::from(board)))
}

/// Rename a board and/or set or clear its end conditions.
pub fn update_board(
    state: &SharedState,
    id: Uuid,
    request: UpdateBoardRequest,
) -> Result<BoardSummary, ServiceError> {
    let UpdateBoardRequest {
        name,
        target_score,
        score_condition,
        number_of_rounds,
    } = request;

    let summary = state.with_board_mut(id, |board| {
        if let Some(name) = name {
            board.name = name.trim().to_string();
        }
        if let Some(target) = target_score {
            board.target_score = target;
        }
        if let Some(condition) = score_condition {
            board.score_condition = condition;
        }
        if let Some(rounds) = number_of_rounds {
            board.number_of_rounds = rounds;
        }
        board.touch();

        Ok(BoardSummary::from(&*board))
    })?;

    sse_events::broadcast_board_updated(state, summary.clone());
    Ok(summary)
}

/// Delete a board and everything it tracks.
pub fn delete_board(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    let board = state
        .remove_board(id)
        .ok_or_else(|| ServiceError::NotFound(format!("board `{id}` not found")))?;

    sse_events::broadcast_board_deleted(state, board.id);
    Ok(())
}

/// Append a participant to a board's roster.
pub fn add_participant(
    state: &SharedState,
    board_id: Uuid,
    request: AddParticipantRequest,
) -> Result<ParticipantSummary, ServiceError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(ServiceError::InvalidInput(
            "participant name must not be empty".into(),
        ));
    }

    let max_participants = state.config().max_participants();

    let summary = state.with_board_mut(board_id, move |board| {
        if board.participants.len() >= max_participants {
            return Err(ServiceError::InvalidInput(format!(
                "board already has the maximum of {max_participants} participants"
            )));
        }

        let id = board.add_participant(name);
        board.touch();

        Ok(ParticipantSummary::from((id, &board.participants[&id])))
    })?;

    sse_events::broadcast_participant_added(state, board_id, summary.clone());
    Ok(summary)
}

/// Remove a participant and every score it recorded.
pub fn remove_participant(
    state: &SharedState,
    board_id: Uuid,
    participant_id: Uuid,
) -> Result<(), ServiceError> {
    state.with_board_mut(board_id, |board| {
        if !board.remove_participant(participant_id) {
            return Err(participant_not_found(participant_id));
        }
        board.touch();
        Ok(())
    })?;

    sse_events::broadcast_participant_removed(state, board_id, participant_id);
    Ok(())
}

/// Record a score for one participant and one round, overwriting in place
/// when the round was already played.
///
/// Once the game is over only corrections of existing rounds are accepted;
/// brand-new entries are rejected so a finished game cannot keep growing.
pub fn record_score(
    state: &SharedState,
    board_id: Uuid,
    participant_id: Uuid,
    request: RecordScoreRequest,
) -> Result<ScoreRecordedResponse, ServiceError> {
    let RecordScoreRequest {
        round_number,
        score_value,
    } = request;

    let (response, game_just_ended) = state.with_board_mut(board_id, |board| {
        let participant = board
            .participants
            .get(&participant_id)
            .ok_or_else(|| participant_not_found(participant_id))?;
        let is_correction = participant.score_for_round(round_number).is_some();

        let was_over = status::evaluate(Some(board)).is_some_and(|status| status.is_game_over);
        if was_over && !is_correction {
            return Err(ServiceError::InvalidState(
                "the game is already over; only existing rounds can be corrected".into(),
            ));
        }

        let (_, entry) = board
            .record_score(participant_id, round_number, score_value)
            .ok_or_else(|| participant_not_found(participant_id))?;
        board.touch();

        let status = GameStatusSummary::from_board(board);
        let now_over = status.as_ref().is_some_and(|status| status.is_game_over);

        let response = ScoreRecordedResponse {
            board_id,
            participant: ParticipantSummary::from((
                participant_id,
                &board.participants[&participant_id],
            )),
            entry: ScoreEntrySummary::from(&entry),
            status,
        };

        Ok((response, !was_over && now_over))
    })?;

    sse_events::broadcast_score_recorded(state, &response);
    if game_just_ended
        && let Some(status) = response.status.clone()
    {
        sse_events::broadcast_game_over(state, board_id, status);
    }

    Ok(response)
}

/// Evaluate a board's status. `status` stays `null` while the roster is
/// empty, which callers must treat as unknown rather than an error.
pub fn game_status(state: &SharedState, board_id: Uuid) -> Result<GameStatusResponse, ServiceError> {
    state.with_board(board_id, |board| {
        Ok(GameStatusResponse {
            status: GameStatusSummary::from_board(board),
        })
    })
}

/// The scoreboard grid: one row per round up to the current one.
pub fn round_rows(state: &SharedState, board_id: Uuid) -> Result<Vec<RoundRowDto>, ServiceError> {
    state.with_board(board_id, |board| {
        Ok(board.round_rows().into_iter().map(Into::into).collect())
    })
}

fn participant_not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("participant `{id}` not found"))
}

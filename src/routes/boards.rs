use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        board::{
            AddParticipantRequest, BoardListItem, BoardSummary, CreateBoardRequest,
            ParticipantSummary, RecordScoreRequest, ScoreRecordedResponse, UpdateBoardRequest,
        },
        rounds::RoundRowDto,
        status::GameStatusResponse,
    },
    error::AppError,
    services::board_service,
    state::SharedState,
};

/// Routes handling board, participant, and score management.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/boards", get(list_boards).post(create_board))
        .route(
            "/api/boards/{id}",
            get(get_board).patch(update_board).delete(delete_board),
        )
        .route("/api/boards/{id}/participants", post(add_participant))
        .route(
            "/api/boards/{id}/participants/{participant_id}",
            delete(remove_participant),
        )
        .route(
            "/api/boards/{id}/participants/{participant_id}/scores",
            put(record_score),
        )
        .route("/api/boards/{id}/status", get(game_status))
        .route("/api/boards/{id}/rounds", get(round_rows))
}

/// List every board, ordered by display position.
#[utoipa::path(
    get,
    path = "/api/boards",
    tag = "boards",
    responses(
        (status = 200, description = "All boards", body = [BoardListItem])
    )
)]
pub async fn list_boards(State(state): State<SharedState>) -> Json<Vec<BoardListItem>> {
    Json(board_service::list_boards(&state))
}

/// Create a fresh board.
#[utoipa::path(
    post,
    path = "/api/boards",
    tag = "boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 200, description = "Board created", body = BoardSummary)
    )
)]
pub async fn create_board(
    State(state): State<SharedState>,
    Json(payload): Json<CreateBoardRequest>,
) -> Result<Json<BoardSummary>, AppError> {
    payload.validate()?;
    let summary = board_service::create_board(&state, payload)?;
    Ok(Json(summary))
}

/// Fetch one board with its derived game status.
#[utoipa::path(
    get,
    path = "/api/boards/{id}",
    tag = "boards",
    params(("id" = Uuid, Path, description = "Identifier of the board")),
    responses(
        (status = 200, description = "Board detail", body = BoardSummary),
        (status = 404, description = "Unknown board")
    )
)]
pub async fn get_board(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BoardSummary>, AppError> {
    let summary = board_service::get_board(&state, id)?;
    Ok(Json(summary))
}

/// Rename a board and/or set or clear its end conditions.
#[utoipa::path(
    patch,
    path = "/api/boards/{id}",
    tag = "boards",
    params(("id" = Uuid, Path, description = "Identifier of the board")),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Board updated", body = BoardSummary),
        (status = 404, description = "Unknown board")
    )
)]
pub async fn update_board(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBoardRequest>,
) -> Result<Json<BoardSummary>, AppError> {
    payload.validate()?;
    let summary = board_service::update_board(&state, id, payload)?;
    Ok(Json(summary))
}

/// Delete a board and all of its scores.
#[utoipa::path(
    delete,
    path = "/api/boards/{id}",
    tag = "boards",
    params(("id" = Uuid, Path, description = "Identifier of the board")),
    responses(
        (status = 204, description = "Board deleted"),
        (status = 404, description = "Unknown board")
    )
)]
pub async fn delete_board(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    board_service::delete_board(&state, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Append a participant to a board's roster.
#[utoipa::path(
    post,
    path = "/api/boards/{id}/participants",
    tag = "boards",
    params(("id" = Uuid, Path, description = "Identifier of the board")),
    request_body = AddParticipantRequest,
    responses(
        (status = 200, description = "Participant added", body = ParticipantSummary),
        (status = 404, description = "Unknown board")
    )
)]
pub async fn add_participant(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddParticipantRequest>,
) -> Result<Json<ParticipantSummary>, AppError> {
    payload.validate()?;
    let summary = board_service::add_participant(&state, id, payload)?;
    Ok(Json(summary))
}

/// Remove a participant from a board's roster.
#[utoipa::path(
    delete,
    path = "/api/boards/{id}/participants/{participant_id}",
    tag = "boards",
    params(
        ("id" = Uuid, Path, description = "Identifier of the board"),
        ("participant_id" = Uuid, Path, description = "Identifier of the participant")
    ),
    responses(
        (status = 204, description = "Participant removed"),
        (status = 404, description = "Unknown board or participant")
    )
)]
pub async fn remove_participant(
    State(state): State<SharedState>,
    Path((id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    board_service::remove_participant(&state, id, participant_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Record or correct a participant's score for one round.
#[utoipa::path(
    put,
    path = "/api/boards/{id}/participants/{participant_id}/scores",
    tag = "boards",
    params(
        ("id" = Uuid, Path, description = "Identifier of the board"),
        ("participant_id" = Uuid, Path, description = "Identifier of the participant")
    ),
    request_body = RecordScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = ScoreRecordedResponse),
        (status = 404, description = "Unknown board or participant"),
        (status = 409, description = "Game is already over")
    )
)]
pub async fn record_score(
    State(state): State<SharedState>,
    Path((id, participant_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<RecordScoreRequest>,
) -> Result<Json<ScoreRecordedResponse>, AppError> {
    payload.validate()?;
    let response = board_service::record_score(&state, id, participant_id, payload)?;
    Ok(Json(response))
}

/// Evaluate the board's game status.
#[utoipa::path(
    get,
    path = "/api/boards/{id}/status",
    tag = "boards",
    params(("id" = Uuid, Path, description = "Identifier of the board")),
    responses(
        (status = 200, description = "Evaluated status (null without participants)", body = GameStatusResponse),
        (status = 404, description = "Unknown board")
    )
)]
pub async fn game_status(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameStatusResponse>, AppError> {
    let response = board_service::game_status(&state, id)?;
    Ok(Json(response))
}

/// The scoreboard grid: one row per round up to the current one.
#[utoipa::path(
    get,
    path = "/api/boards/{id}/rounds",
    tag = "boards",
    params(("id" = Uuid, Path, description = "Identifier of the board")),
    responses(
        (status = 200, description = "Round rows", body = [RoundRowDto]),
        (status = 404, description = "Unknown board")
    )
)]
pub async fn round_rows(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<RoundRowDto>>, AppError> {
    let rows = board_service::round_rows(&state, id)?;
    Ok(Json(rows))
}

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for GameGauge Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::sse::board_events_stream,
        crate::routes::boards::list_boards,
        crate::routes::boards::create_board,
        crate::routes::boards::get_board,
        crate::routes::boards::update_board,
        crate::routes::boards::delete_board,
        crate::routes::boards::add_participant,
        crate::routes::boards::remove_participant,
        crate::routes::boards::record_score,
        crate::routes::boards::game_status,
        crate::routes::boards::round_rows,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::board::CreateBoardRequest,
            crate::dto::board::UpdateBoardRequest,
            crate::dto::board::AddParticipantRequest,
            crate::dto::board::RecordScoreRequest,
            crate::dto::board::BoardListItem,
            crate::dto::board::BoardSummary,
            crate::dto::board::ParticipantSummary,
            crate::dto::board::ScoreEntrySummary,
            crate::dto::board::ScoreRecordedResponse,
            crate::dto::status::GameStatusSummary,
            crate::dto::status::GameStatusResponse,
            crate::dto::rounds::RoundRowDto,
            crate::dto::sse::BoardCreatedEvent,
            crate::dto::sse::BoardUpdatedEvent,
            crate::dto::sse::BoardDeletedEvent,
            crate::dto::sse::ParticipantAddedEvent,
            crate::dto::sse::ParticipantRemovedEvent,
            crate::dto::sse::ScoreRecordedEvent,
            crate::dto::sse::GameOverEvent,
            crate::state::board::ScoreCondition,
        )
    ),
    tags(
        (name = "boards", description = "Board, participant, and score management"),
        (name = "health", description = "Health check endpoints"),
        (name = "sse", description = "Server-sent events streams"),
    )
)]
pub struct ApiDoc;

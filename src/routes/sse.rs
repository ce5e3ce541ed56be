use std::convert::Infallible;

use axum::{Router, extract::State, response::sse::Sse, routing::get};
use futures::Stream;
use tracing::info;

use crate::{services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/sse/boards",
    tag = "sse",
    responses((status = 200, description = "Board mutation event stream", content_type = "text/event-stream", body = String))
)]
/// Stream board mutation events to connected frontends.
pub async fn board_events_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let receiver = sse_service::subscribe(&state);
    info!("New board events SSE connection");
    sse_service::broadcast_info(state.events(), "board events stream connected");
    sse_service::to_sse_stream(receiver)
}

/// Configure the SSE endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/sse/boards", get(board_events_stream))
}

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a static health payload carrying the live board count.
pub fn health_status(state: &SharedState) -> HealthResponse {
    HealthResponse::ok(state.board_count())
}

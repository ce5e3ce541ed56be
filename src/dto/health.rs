use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status (always "ok"; the service has no degraded mode).
    pub status: String,
    /// Number of boards currently tracked in memory.
    pub boards: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(boards: usize) -> Self {
        Self {
            status: "ok".to_string(),
            boards,
        }
    }
}

pub mod board;
mod sse;
pub mod status;

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use dashmap::DashMap;
use uuid::Uuid;

use crate::{config::AppConfig, error::ServiceError, state::board::Board};

pub use self::sse::SseHub;

/// Cheaply clonable handle to the shared application state.
pub type SharedState = Arc<AppState>;

/// Central application state: the in-memory board registry, the SSE hub, and
/// the loaded configuration.
pub struct AppState {
    config: AppConfig,
    boards: DashMap<Uuid, Board>,
    events: SseHub,
    next_display_order: AtomicU32,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        let events = SseHub::new(config.sse_capacity());
        Arc::new(Self {
            config,
            boards: DashMap::new(),
            events,
            next_display_order: AtomicU32::new(1),
        })
    }

    /// Loaded runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Hub used to push board mutation events to SSE subscribers.
    pub fn events(&self) -> &SseHub {
        &self.events
    }

    /// Number of boards currently tracked.
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Claim the next position in the board list ordering.
    pub fn claim_display_order(&self) -> u32 {
        self.next_display_order.fetch_add(1, Ordering::Relaxed)
    }

    /// Insert a freshly created board into the registry.
    pub fn insert_board(&self, board: Board) {
        self.boards.insert(board.id, board);
    }

    /// Remove a board, returning it when it existed.
    pub fn remove_board(&self, id: Uuid) -> Option<Board> {
        self.boards.remove(&id).map(|(_, board)| board)
    }

    /// Clone of every board currently tracked, in no particular order.
    pub fn boards_snapshot(&self) -> Vec<Board> {
        self.boards
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Run `work` against a board under its map entry lock.
    pub fn with_board<F, T>(&self, id: Uuid, work: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&Board) -> Result<T, ServiceError>,
    {
        let entry = self.boards.get(&id).ok_or_else(|| board_not_found(id))?;
        work(entry.value())
    }

    /// Run `work` against a board mutably under its map entry lock. Mutating
    /// closures are expected to call [`Board::touch`] themselves.
    pub fn with_board_mut<F, T>(&self, id: Uuid, work: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut Board) -> Result<T, ServiceError>,
    {
        let mut entry = self.boards.get_mut(&id).ok_or_else(|| board_not_found(id))?;
        work(entry.value_mut())
    }
}

fn board_not_found(id: Uuid) -> ServiceError {
    ServiceError::NotFound(format!("board `{id}` not found"))
}

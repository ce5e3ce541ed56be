use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::board::RoundRow;

/// One row of the scoreboard table: a round number and every participant's
/// score for it, `null` where the round was not played yet.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct RoundRowDto {
    /// 1-based round the row describes.
    pub round_number: u32,
    /// Score keyed by participant id, in roster order.
    #[schema(value_type = Object)]
    pub scores: IndexMap<Uuid, Option<i32>>,
}

impl From<RoundRow> for RoundRowDto {
    fn from(row: RoundRow) -> Self {
        Self {
            round_number: row.round_number,
            scores: row.scores,
        }
    }
}

//! Draw DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body for `POST /api/v1/draw`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DrawResponse {
    /// The selected name.
    pub winner: String,
    /// How many names took part.
    pub participant_count: usize,
    /// Always `true` after a successful draw.
    pub reset_available: bool,
    /// Draw timestamp.
    pub drawn_at: DateTime<Utc>,
}

/// Response body for `GET /api/v1/draw`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LastDrawResponse {
    /// Last drawn name, or `null` if nothing has been drawn since the last
    /// reset.
    pub winner: Option<String>,
    /// `collecting` or `drawn`.
    pub phase: String,
}

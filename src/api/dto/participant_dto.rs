//! Participant list DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{MIN_PARTICIPANTS, ParticipantName, Phase, RegistrySnapshot};

/// Request body for `POST /api/v1/participants`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddParticipantRequest {
    /// Raw name as typed; surrounding whitespace is ignored. A missing
    /// field is treated as an empty name.
    #[serde(default)]
    pub name: String,
}

/// Response body for `POST /api/v1/participants` (201 Created).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParticipantsResponse {
    /// All names in insertion order.
    pub participants: Vec<String>,
    /// Number of names.
    pub count: usize,
    /// Whether a draw would be accepted.
    pub can_draw: bool,
}

impl From<Vec<ParticipantName>> for ParticipantsResponse {
    fn from(names: Vec<ParticipantName>) -> Self {
        let count = names.len();
        Self {
            participants: names.into_iter().map(String::from).collect(),
            count,
            can_draw: count >= MIN_PARTICIPANTS,
        }
    }
}

/// Full widget state for `GET /api/v1/participants` and `POST /api/v1/reset`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistryStateResponse {
    /// All names in insertion order.
    pub participants: Vec<String>,
    /// Number of names.
    pub count: usize,
    /// `collecting` or `drawn`.
    pub phase: String,
    /// Last drawn name, if a result is shown.
    pub winner: Option<String>,
    /// Whether a draw would be accepted.
    pub can_draw: bool,
    /// Whether the reset affordance should be shown.
    pub reset_available: bool,
}

impl From<RegistrySnapshot> for RegistryStateResponse {
    fn from(snapshot: RegistrySnapshot) -> Self {
        let count = snapshot.participants.len();
        Self {
            participants: snapshot.participants.into_iter().map(String::from).collect(),
            count,
            phase: phase_str(snapshot.phase).to_string(),
            winner: snapshot.winner.map(String::from),
            can_draw: count >= MIN_PARTICIPANTS,
            reset_available: snapshot.reset_available,
        }
    }
}

/// Wire name of a [`Phase`].
#[must_use]
pub const fn phase_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Collecting => "collecting",
        Phase::Drawn => "drawn",
    }
}

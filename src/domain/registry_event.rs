//! Domain events reflecting registry state changes.
//!
//! Every successful mutation emits a [`RegistryEvent`] through the
//! [`super::EventBus`]. Connected browsers receive them over WebSocket and
//! redraw the list, the result, and the reset button accordingly.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ParticipantName;

/// Domain event emitted after every successful registry operation.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A name was accepted.
    ParticipantAdded {
        /// The name as stored (trimmed).
        name: ParticipantName,
        /// Full list after the insertion, in order.
        participants: Vec<ParticipantName>,
        /// When the name was added.
        timestamp: DateTime<Utc>,
    },

    /// A winner was drawn; the reset affordance should be shown.
    WinnerDrawn {
        /// The selected name.
        winner: ParticipantName,
        /// How many names took part in the draw.
        participant_count: usize,
        /// When the draw happened.
        timestamp: DateTime<Utc>,
    },

    /// The registry was cleared; list, result and reset button go away.
    RegistryCleared {
        /// When the reset happened.
        timestamp: DateTime<Utc>,
    },
}

impl RegistryEvent {
    /// Returns the snake_case event type string.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::ParticipantAdded { .. } => "participant_added",
            Self::WinnerDrawn { .. } => "winner_drawn",
            Self::RegistryCleared { .. } => "registry_cleared",
        }
    }

    /// Returns the event timestamp.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::ParticipantAdded { timestamp, .. }
            | Self::WinnerDrawn { timestamp, .. }
            | Self::RegistryCleared { timestamp } => *timestamp,
        }
    }
}

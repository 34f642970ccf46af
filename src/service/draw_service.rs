//! Draw service: owns the registry and emits events.

use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::{
    EventBus, ParticipantName, ParticipantRegistry, RandomSource, RegistryEvent, RegistrySnapshot,
};
use crate::error::RegistryError;

/// Result of a successful draw as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The selected name.
    pub winner: ParticipantName,
    /// How many names took part.
    pub participant_count: usize,
}

/// Orchestration layer for registry operations.
///
/// Holds the single [`ParticipantRegistry`] behind an async mutex so
/// requests are applied one at a time and in arrival order. Every
/// mutation follows the same pattern: lock → call the registry → release
/// → log → emit event → return result. Failed operations emit nothing.
#[derive(Debug)]
pub struct DrawService {
    registry: Mutex<ParticipantRegistry>,
    event_bus: EventBus,
}

impl DrawService {
    /// Creates a service around an empty registry using `random` for draws.
    #[must_use]
    pub fn new(random: Box<dyn RandomSource>, event_bus: EventBus) -> Self {
        Self::from_registry(ParticipantRegistry::with_random(random), event_bus)
    }

    /// Creates a service around an existing registry.
    #[must_use]
    pub fn from_registry(registry: ParticipantRegistry, event_bus: EventBus) -> Self {
        Self {
            registry: Mutex::new(registry),
            event_bus,
        }
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Adds a participant and returns the updated list.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError::EmptyName`],
    /// [`RegistryError::DuplicateName`] and [`RegistryError::AlreadyDrawn`].
    pub async fn add(&self, candidate: &str) -> Result<Vec<ParticipantName>, RegistryError> {
        let participants = {
            let mut registry = self.registry.lock().await;
            match registry.add(candidate) {
                Ok(list) => list.to_vec(),
                Err(err) => {
                    tracing::debug!(error = %err, "participant rejected");
                    return Err(err);
                }
            }
        };

        let Some(name) = participants.last().cloned() else {
            return Ok(participants);
        };
        tracing::info!(participant = %name, total = participants.len(), "participant added");

        let _ = self.event_bus.publish(RegistryEvent::ParticipantAdded {
            name,
            participants: participants.clone(),
            timestamp: Utc::now(),
        });

        Ok(participants)
    }

    /// Draws a winner.
    ///
    /// # Errors
    ///
    /// Propagates [`RegistryError::InsufficientParticipants`] and
    /// [`RegistryError::IndexOutOfRange`].
    pub async fn draw(&self) -> Result<DrawOutcome, RegistryError> {
        let (winner, participant_count) = {
            let mut registry = self.registry.lock().await;
            let outcome = registry.draw();
            let count = registry.len();
            match outcome {
                Ok(winner) => (winner, count),
                Err(err) => {
                    tracing::debug!(error = %err, participants = count, "draw refused");
                    return Err(err);
                }
            }
        };

        tracing::info!(winner = %winner, participants = participant_count, "winner drawn");

        let _ = self.event_bus.publish(RegistryEvent::WinnerDrawn {
            winner: winner.clone(),
            participant_count,
            timestamp: Utc::now(),
        });

        Ok(DrawOutcome {
            winner,
            participant_count,
        })
    }

    /// Clears the registry and any drawn result.
    pub async fn reset(&self) -> RegistrySnapshot {
        let snapshot = {
            let mut registry = self.registry.lock().await;
            let cleared = registry.len();
            registry.reset();
            tracing::info!(cleared, "registry reset");
            registry.snapshot()
        };

        let _ = self.event_bus.publish(RegistryEvent::RegistryCleared {
            timestamp: Utc::now(),
        });

        snapshot
    }

    /// Returns the current state for display.
    pub async fn snapshot(&self) -> RegistrySnapshot {
        self.registry.lock().await.snapshot()
    }

    /// Returns the last drawn name, if any.
    pub async fn winner(&self) -> Option<ParticipantName> {
        self.registry.lock().await.winner().cloned()
    }
}

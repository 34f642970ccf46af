//! Broadcast channel for registry events.
//!
//! [`EventBus`] wraps a [`tokio::sync::broadcast`] channel. The service
//! publishes a [`RegistryEvent`] after each successful operation and every
//! WebSocket connection holds its own receiver.

use tokio::sync::broadcast;

use super::RegistryEvent;

/// Broadcast bus for [`RegistryEvent`]s.
///
/// When the ring buffer is full the oldest events are dropped for lagging
/// receivers.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<RegistryEvent>,
}

impl EventBus {
    /// Creates a new `EventBus` with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of receivers that got the event; zero when nobody
    /// is listening.
    pub fn publish(&self, event: RegistryEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Creates a receiver for all future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.sender.subscribe()
    }

    /// Returns the current number of active receivers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

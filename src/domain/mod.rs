//! Domain layer: participant names, the registry, randomness, and events.
//!
//! Everything here is synchronous except the [`EventBus`], which only
//! wraps a broadcast channel. The registry itself knows nothing about
//! HTTP, WebSocket, or rendering.

pub mod event_bus;
pub mod participant_name;
pub mod random_source;
pub mod registry;
pub mod registry_event;

pub use event_bus::EventBus;
pub use participant_name::ParticipantName;
pub use random_source::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use registry::{MIN_PARTICIPANTS, ParticipantRegistry, Phase, RegistrySnapshot};
pub use registry_event::RegistryEvent;

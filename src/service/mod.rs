//! Service layer: registry ownership and event emission.
//!
//! [`DrawService`] holds the single participant registry and publishes
//! through the [`super::domain::EventBus`].

pub mod draw_service;

pub use draw_service::{DrawOutcome, DrawService};

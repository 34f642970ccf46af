//! # secret-friend
//!
//! Participant registry and uniform random draw for a "Secret Friend"
//! name-drawing widget, plus a small REST and WebSocket host a browser
//! front-end can drive.
//!
//! The core ([`domain::ParticipantRegistry`]) is synchronous and knows
//! nothing about HTTP or rendering: it validates names, draws a winner
//! through an injectable [`domain::RandomSource`], and resets. Everything
//! else is a thin shell around it.
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTTP, WebSocket)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── WS Handler (ws/)
//!     │
//!     ├── DrawService (service/)
//!     ├── EventBus (domain/)
//!     │
//!     └── ParticipantRegistry + RandomSource (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;

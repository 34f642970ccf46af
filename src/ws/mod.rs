//! WebSocket layer: connection handling and command dispatch.
//!
//! The endpoint at `/ws` lets a browser drive the registry with commands
//! and pushes every registry event to all connected clients.

pub mod connection;
pub mod handler;
pub mod messages;

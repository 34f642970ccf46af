//! Data Transfer Objects for REST request/response serialization.
//!
//! Names are exposed as plain strings; the validated
//! [`crate::domain::ParticipantName`] never crosses the wire.

pub mod draw_dto;
pub mod participant_dto;

pub use draw_dto::*;
pub use participant_dto::*;

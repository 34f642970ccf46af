//! Participant handlers: list, add, reset.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{AddParticipantRequest, ParticipantsResponse, RegistryStateResponse};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `GET /participants` — Current widget state.
#[utoipa::path(
    get,
    path = "/api/v1/participants",
    tag = "Participants",
    summary = "Get registry state",
    description = "Returns the ordered participant list, the current phase, and the last winner if one is shown.",
    responses(
        (status = 200, description = "Registry state", body = RegistryStateResponse),
    )
)]
pub async fn list_participants(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.draw_service.snapshot().await;
    Json(RegistryStateResponse::from(snapshot))
}

/// `POST /participants` — Add a participant.
///
/// # Errors
///
/// Returns [`ApiError`] for blank or duplicate names, when a winner is
/// already shown, or when the body is not a JSON object with a string
/// `name`.
#[utoipa::path(
    post,
    path = "/api/v1/participants",
    tag = "Participants",
    summary = "Add a participant",
    description = "Trims the name and appends it. Names are unique ignoring case.",
    request_body = AddParticipantRequest,
    responses(
        (status = 201, description = "Participant added", body = ParticipantsResponse),
        (status = 400, description = "Name is empty or body is malformed", body = ErrorResponse),
        (status = 409, description = "Duplicate name or draw already made", body = ErrorResponse),
    )
)]
pub async fn add_participant(
    State(state): State<AppState>,
    body: Result<Json<AddParticipantRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let participants = state.draw_service.add(&req.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(ParticipantsResponse::from(participants)),
    ))
}

/// `POST /reset` — Clear the list and any result.
#[utoipa::path(
    post,
    path = "/api/v1/reset",
    tag = "Participants",
    summary = "Reset the registry",
    description = "Empties the participant list, forgets the winner and hides the reset affordance. Always succeeds.",
    responses(
        (status = 200, description = "Registry cleared", body = RegistryStateResponse),
    )
)]
pub async fn reset(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.draw_service.reset().await;
    Json(RegistryStateResponse::from(snapshot))
}

/// Participant routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/participants",
            get(list_participants)
                .post(add_participant)
                .delete(reset),
        )
        .route("/reset", post(reset))
}

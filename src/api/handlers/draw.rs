//! Draw handlers: perform a draw, read the last result.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;

use crate::api::dto::{DrawResponse, LastDrawResponse, phase_str};
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /draw` — Pick a winner uniformly at random.
///
/// # Errors
///
/// Returns [`ApiError`] when fewer than two participants are registered.
#[utoipa::path(
    post,
    path = "/api/v1/draw",
    tag = "Draw",
    summary = "Draw a winner",
    description = "Selects one registered name uniformly at random. The list is not modified. Drawing again replaces the previous result.",
    responses(
        (status = 200, description = "Winner drawn", body = DrawResponse),
        (status = 422, description = "Not enough participants", body = ErrorResponse),
    )
)]
pub async fn draw(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let outcome = state.draw_service.draw().await?;

    Ok(Json(DrawResponse {
        winner: outcome.winner.into_inner(),
        participant_count: outcome.participant_count,
        reset_available: true,
        drawn_at: Utc::now(),
    }))
}

/// `GET /draw` — Last drawn winner, if any.
#[utoipa::path(
    get,
    path = "/api/v1/draw",
    tag = "Draw",
    summary = "Get the last result",
    description = "Returns the winner currently shown, or null when the registry is collecting names.",
    responses(
        (status = 200, description = "Last result", body = LastDrawResponse),
    )
)]
pub async fn last_draw(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.draw_service.snapshot().await;
    Json(LastDrawResponse {
        winner: snapshot.winner.map(String::from),
        phase: phase_str(snapshot.phase).to_string(),
    })
}

/// Draw routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/draw", post(draw).get(last_draw))
}

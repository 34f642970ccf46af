//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{
    AddParticipantRequest, DrawResponse, LastDrawResponse, ParticipantsResponse,
    RegistryStateResponse,
};
use super::handlers::{draw, participants, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "secret-friend",
        description = "Participant registry and uniform random draw for a Secret Friend widget."
    ),
    paths(
        participants::list_participants,
        participants::add_participant,
        participants::reset,
        draw::draw,
        draw::last_draw,
        system::health_handler,
    ),
    components(schemas(
        AddParticipantRequest,
        ParticipantsResponse,
        RegistryStateResponse,
        DrawResponse,
        LastDrawResponse,
        system::HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Participants", description = "Add, list and clear participant names"),
        (name = "Draw", description = "Pick a winner"),
        (name = "System", description = "Health"),
    )
)]
pub struct ApiDoc;

/// Path of the served OpenAPI JSON.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Swagger UI router serving [`ApiDoc`].
#[cfg(feature = "swagger-ui")]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/participants",
            "/api/v1/reset",
            "/api/v1/draw",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}

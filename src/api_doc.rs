use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ClientProfile, HealthResponse, ProfilePatch, ProfileView};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "client-profile-service API",
        version = "1.0.0",
        description = "Read, partially update and delete in-memory client profiles"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get::get_profile_handler,
        handlers::update::update_profile_handler,
        handlers::delete::delete_profile_handler
    ),
    components(
        schemas(
            ClientProfile,
            ProfileView,
            ProfilePatch,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "profile", description = "Client profile operations")
    )
)]
pub struct ApiDoc;

//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Showreel API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Showreel API",
        version = "0.1.0",
        description = "Portfolio showcase backend: the public reel plus the admin panel API"
    ),
    nest(
        (path = "/api/projects", api = domain_showcase::handlers::AdminApiDoc),
        (path = "/api/showcase", api = domain_showcase::handlers::PublicApiDoc)
    )
)]
pub struct ApiDoc;

use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Reveal-o backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::puzzle::get_puzzle,
        crate::routes::puzzle::report_completion,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::puzzle::PuzzleResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "puzzle", description = "Daily puzzle read and play reporting"),
    )
)]
pub struct ApiDoc;

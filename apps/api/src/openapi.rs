use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the Taskboard API
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "CRUD API for tracking tasks"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/tasks", api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;

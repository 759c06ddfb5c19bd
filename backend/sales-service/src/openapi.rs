/// OpenAPI documentation for the Sales API
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{ErrorResponse, HealthResponse, SalesRecord};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sales API",
        version = "1.0.0",
        description = "Sales API Information",
        contact(
            name = "Amazing Developer"
        )
    ),
    servers(
        (url = "http://localhost:4010"),
    ),
    paths(
        handlers::sales::get_sales,
        handlers::health::health_check,
    ),
    components(
        schemas(SalesRecord, ErrorResponse, HealthResponse)
    ),
    tags(
        (name = "sales", description = "Sales data"),
        (name = "health", description = "Service health checks"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Sales API"
    }

    pub fn version() -> &'static str {
        "1.0.0"
    }

    /// Browser-facing path of the Swagger UI
    pub fn docs_path() -> &'static str {
        "/api-docs"
    }

    pub fn openapi_json_path() -> &'static str {
        "/api-docs/openapi.json"
    }
}

//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Template API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Template API",
        version = "0.1.0",
        description = "Layered CRUD API for adding and listing products"
    ),
    nest(
        (path = domain_products::handlers::URL, api = domain_products::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;

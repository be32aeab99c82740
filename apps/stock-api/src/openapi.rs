//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Stock API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock API",
        version = "0.1.0",
        description = "Inventory product management: name, unique barcode and quantity on hand",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    )
)]
pub struct ApiDoc;

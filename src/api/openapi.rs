//! OpenAPI documentation configuration for the resource API host.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee Shop API",
        version = "0.4.0",
        description = "CRUD API over the coffee catalog"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Coffee endpoints
        api::coffees::list_coffees,
        api::coffees::get_coffee,
        api::coffees::create_coffee,
        api::coffees::update_coffee,
        api::coffees::delete_coffee,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Coffees
            models::Roast,
            models::CoffeeResponse,
            models::CoffeeListResponse,
            models::CreateCoffeeRequest,
            models::UpdateCoffeeRequest,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Coffees", description = "Coffee catalog")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/coffees"));
        assert!(doc.paths.paths.contains_key("/api/v1/coffees/{id}"));
    }
}

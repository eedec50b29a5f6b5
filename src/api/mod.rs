//! API endpoint modules.

pub mod coffees;
pub mod health;
pub mod oidc;
pub mod openapi;

pub use coffees::configure_routes as configure_coffee_routes;
pub use health::configure_health_routes;
pub use oidc::configure_routes as configure_oidc_routes;
pub use openapi::ApiDoc;

//! SeaORM entity definitions.
//!
//! Configuration store: clients, identity_resources, api_scopes,
//! api_resources (+ api_resource_scopes). Identity store: users,
//! user_claims. Resource store: coffees.

pub mod api_resource;
pub mod api_resource_scope;
pub mod api_scope;
pub mod client;
pub mod coffee;
pub mod identity_resource;
pub mod user;
pub mod user_claim;

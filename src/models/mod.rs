//! Domain models decoupled from storage entities.

pub mod client;
pub mod coffee;
pub mod resource;
pub mod seed;
pub mod token;
pub mod user;

pub use client::{Client, ClientSeed, grant_types};
pub use coffee::{Coffee, CoffeeListResponse, CoffeeResponse, CreateCoffeeRequest, Roast, UpdateCoffeeRequest};
pub use resource::{ApiResource, ApiScope, IdentityResource};
pub use seed::SeedData;
pub use token::{AccessClaims, DiscoveryDocument, TokenRequest, TokenResponse};
pub use user::{SeedUser, User, UserClaim, claim_types};

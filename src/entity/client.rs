//! Client entity: a registered OAuth2/OIDC relying party.
//!
//! Grant types, scopes, and redirect URIs are stored space-separated
//! (OAuth wire format); the secret is stored as a SHA-256 hex digest,
//! NULL for public clients.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub client_id: String,
    pub client_name: String,
    pub secret_hash: Option<String>,
    pub allowed_grant_types: String,
    pub allowed_scopes: String,
    pub redirect_uris: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

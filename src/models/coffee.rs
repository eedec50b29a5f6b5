//! Coffee catalog models for the resource API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Roast level of a coffee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Roast {
    Light,
    Medium,
    Dark,
}

impl Roast {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }
}

/// Coffee stored in the catalog.
#[derive(Debug, Clone)]
pub struct Coffee {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub roast: String,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Coffee representation returned by the API.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoffeeResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub roast: String,
    pub price_cents: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Coffee> for CoffeeResponse {
    fn from(c: Coffee) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            roast: c.roast,
            price_cents: c.price_cents,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

/// Response for the list endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct CoffeeListResponse {
    pub coffees: Vec<CoffeeResponse>,
}

/// Request body for creating a coffee.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCoffeeRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub roast: Roast,
    pub price_cents: i64,
}

/// Request body for updating a coffee. All fields optional.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCoffeeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub roast: Option<Roast>,
    pub price_cents: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roast_parse_round_trip() {
        for roast in [Roast::Light, Roast::Medium, Roast::Dark] {
            assert_eq!(Roast::parse(roast.as_str()), Some(roast));
        }
        assert_eq!(Roast::parse("burnt"), None);
    }
}

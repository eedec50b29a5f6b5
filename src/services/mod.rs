//! Business logic services.

pub mod seed;
pub mod tokens;

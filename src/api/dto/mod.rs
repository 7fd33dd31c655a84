//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names, and validator for input validation.

pub mod analytics;
pub mod clicks;
pub mod health;
pub mod links;
pub mod shorten;

//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Registry storage (JSON file and in-memory)
//! - [`user_agent`] - User-agent classification backed by woothee

pub mod persistence;
pub mod user_agent;

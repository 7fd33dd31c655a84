//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod registry_storage;

pub use registry_storage::RegistryStorage;

#[cfg(test)]
pub use registry_storage::MockRegistryStorage;

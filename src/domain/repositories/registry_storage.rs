//! Storage contract for the link registry document.

use crate::domain::registry::Registry;
use crate::error::AppError;
use async_trait::async_trait;

/// Whole-document storage for the [`Registry`].
///
/// Implementations only load and overwrite the full document. Serializing
/// read-modify-write cycles is the caller's job (see
/// [`crate::application::services::LinkService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStorage`] - JSON file on disk
/// - [`crate::infrastructure::persistence::MemoryStorage`] - in-process, for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryStorage: Send + Sync {
    /// Loads the full registry.
    ///
    /// A missing document is a first run and yields an empty registry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the document exists but cannot be
    /// read or does not parse as a valid registry.
    async fn load(&self) -> Result<Registry, AppError>;

    /// Replaces the stored document with `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on write failure.
    async fn save(&self, registry: &Registry) -> Result<(), AppError>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}

//! In-process registry storage.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::registry::Registry;
use crate::domain::repositories::RegistryStorage;
use crate::error::AppError;

/// Keeps the registry in memory. Used by tests and `STORAGE_BACKEND=memory`.
///
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStorage {
    registry: RwLock<Registry>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing registry.
    pub fn with_registry(registry: Registry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }
}

#[async_trait]
impl RegistryStorage for MemoryStorage {
    async fn load(&self) -> Result<Registry, AppError> {
        Ok(self.registry.read().await.clone())
    }

    async fn save(&self, registry: &Registry) -> Result<(), AppError> {
        *self.registry.write().await = registry.clone();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkRecord;
    use chrono::Utc;

    #[tokio::test]
    async fn test_starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_contents() {
        let mut registry = Registry::new();
        registry
            .insert(LinkRecord::new(
                "abc".to_string(),
                "https://example.com".to_string(),
                Utc::now(),
            ))
            .unwrap();

        let storage = MemoryStorage::with_registry(registry.clone());
        assert_eq!(storage.load().await.unwrap(), registry);

        storage.save(&Registry::new()).await.unwrap();
        assert!(storage.load().await.unwrap().is_empty());
    }
}

//! JSON document storage for the link registry.

use async_trait::async_trait;
use serde_json::json;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::registry::Registry;
use crate::domain::repositories::RegistryStorage;
use crate::error::AppError;

/// Stores the whole registry as one pretty-printed JSON file.
///
/// Saves write a sibling `.tmp` file and rename it over the document, so a
/// crash mid-write leaves the previous version intact.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn io_error(&self, message: &str, e: std::io::Error) -> AppError {
        AppError::storage(
            message,
            json!({
                "path": self.path.display().to_string(),
                "reason": e.to_string(),
            }),
        )
    }
}

#[async_trait]
impl RegistryStorage for JsonFileStorage {
    async fn load(&self) -> Result<Registry, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %self.path.display(),
                    "Registry file missing, starting empty"
                );
                return Ok(Registry::new());
            }
            Err(e) => return Err(self.io_error("Failed to read registry", e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            AppError::storage(
                "Registry document is corrupt",
                json!({
                    "path": self.path.display().to_string(),
                    "reason": e.to_string(),
                }),
            )
        })
    }

    async fn save(&self, registry: &Registry) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error("Failed to create registry directory", e))?;
        }

        let bytes = serde_json::to_vec_pretty(registry).map_err(|e| {
            AppError::internal(
                "Failed to serialize registry",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, bytes)
            .await
            .map_err(|e| self.io_error("Failed to write registry", e))?;

        // Atomic rename
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.io_error("Failed to replace registry", e))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

//! Link registry service: creation, lookup and click recording.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::client_metadata::ClientMetadata;
use crate::domain::entities::{ClickEvent, LinkRecord, LinkSummary};
use crate::domain::registry::Registry;
use crate::domain::repositories::RegistryStorage;
use crate::domain::user_agent::{DeviceInfo, UserAgentClassifier};
use crate::error::AppError;
use crate::utils::code_generator::{generate_short_id, validate_custom_alias};
use crate::utils::url_validator::validate_url;

/// Maximum attempts to find an unused generated identifier.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Source of candidate short identifiers.
pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// Result of following a short link.
#[derive(Debug, Clone)]
pub struct Visit {
    pub original_url: String,
    pub click: ClickEvent,
}

/// Service owning the mapping from short identifier to [`LinkRecord`].
///
/// Every mutation is a load-modify-save cycle over the whole registry,
/// serialized by an async mutex so concurrent requests in this process never
/// lose updates. Reads go straight to storage.
pub struct LinkService<S: RegistryStorage + ?Sized> {
    storage: Arc<S>,
    classifier: Arc<dyn UserAgentClassifier>,
    id_generator: IdGenerator,
    write_lock: Mutex<()>,
}

impl<S: RegistryStorage + ?Sized> LinkService<S> {
    /// Creates a new link service.
    pub fn new(storage: Arc<S>, classifier: Arc<dyn UserAgentClassifier>) -> Self {
        Self {
            storage,
            classifier,
            id_generator: Box::new(generate_short_id),
            write_lock: Mutex::new(()),
        }
    }

    /// Replaces the random identifier source.
    pub fn with_id_generator(mut self, generator: IdGenerator) -> Self {
        self.id_generator = generator;
        self
    }

    /// Name of the underlying storage backend.
    pub fn backend_name(&self) -> &'static str {
        self.storage.backend_name()
    }

    /// Creates a short link.
    ///
    /// An empty `custom_alias` is treated as absent.
    ///
    /// # Code Generation
    ///
    /// Without an alias, a 6-character alphanumeric identifier is generated.
    /// Identifiers already present are regenerated, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or alias is invalid.
    /// Returns [`AppError::Conflict`] if the alias is already registered.
    /// Returns [`AppError::Internal`] if no free identifier was found.
    /// Returns [`AppError::Storage`] on load or save failure.
    pub async fn create_link(
        &self,
        original_url: String,
        custom_alias: Option<String>,
    ) -> Result<LinkRecord, AppError> {
        validate_url(&original_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let custom_alias = custom_alias.filter(|alias| !alias.is_empty());
        if let Some(alias) = &custom_alias {
            validate_custom_alias(alias)?;
        }

        let record = self
            .mutate(move |registry| {
                let short_id = match custom_alias {
                    Some(alias) if registry.contains(&alias) => {
                        return Err(AppError::conflict(
                            "Alias already exists",
                            json!({ "alias": alias }),
                        ));
                    }
                    Some(alias) => alias,
                    None => unused_short_id(registry, &self.id_generator)?,
                };

                let record = LinkRecord::new(short_id, original_url, Utc::now());
                registry.insert(record.clone()).map_err(|r| {
                    AppError::conflict("Alias already exists", json!({ "alias": r.short_id }))
                })?;
                Ok(record)
            })
            .await?;

        info!(short_id = %record.short_id, url = %record.original_url, "Link created");
        Ok(record)
    }

    /// Looks up a link by short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Storage`] on load failure.
    pub async fn resolve(&self, short_id: &str) -> Result<LinkRecord, AppError> {
        let registry = self.storage.load().await?;

        registry
            .get(short_id)
            .cloned()
            .ok_or_else(|| not_found(short_id))
    }

    /// Appends a click to a link's log and increments its counter.
    ///
    /// Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Storage`] on load or save failure.
    pub async fn record_click(
        &self,
        short_id: &str,
        event: ClickEvent,
    ) -> Result<LinkRecord, AppError> {
        let record = self
            .mutate(|registry| {
                let record = registry
                    .get_mut(short_id)
                    .ok_or_else(|| not_found(short_id))?;
                record.record_click(event);
                Ok(record.clone())
            })
            .await?;

        debug!(short_id, clicks = record.click_count(), "Click recorded");
        Ok(record)
    }

    /// Follows a short link: classifies the client, records the click and
    /// returns the redirect target.
    ///
    /// # Errors
    ///
    /// See [`Self::record_click`].
    pub async fn visit(&self, short_id: &str, client: ClientMetadata) -> Result<Visit, AppError> {
        let device = client
            .user_agent
            .as_deref()
            .map(|ua| self.classifier.classify(ua))
            .unwrap_or_else(DeviceInfo::default);

        let click = ClickEvent::capture(client, device, Utc::now());
        let record = self.record_click(short_id, click.clone()).await?;

        Ok(Visit {
            original_url: record.original_url,
            click,
        })
    }

    /// Lists every link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on load failure.
    pub async fn list_all(&self) -> Result<Vec<LinkSummary>, AppError> {
        Ok(self.storage.load().await?.summaries())
    }

    /// Runs `f` against the current registry and saves the result.
    ///
    /// Holds the write lock for the whole cycle. Nothing is saved if `f`
    /// fails.
    async fn mutate<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Registry) -> Result<T, AppError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut registry = self.storage.load().await?;
        let output = f(&mut registry)?;
        self.storage.save(&registry).await?;

        Ok(output)
    }
}

fn not_found(short_id: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "short_id": short_id }))
}

fn unused_short_id(
    registry: &Registry,
    generate: impl Fn() -> String,
) -> Result<String, AppError> {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let candidate = generate();
        if !registry.contains(&candidate) {
            return Ok(candidate);
        }
    }

    Err(AppError::internal(
        "Failed to generate unique short id",
        json!({ "reason": "Too many collisions" }),
    ))
}

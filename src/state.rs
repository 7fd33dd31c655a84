//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService};
use crate::domain::repositories::RegistryStorage;
use crate::domain::user_agent::UserAgentClassifier;

/// Services shared by all handlers.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn RegistryStorage>>,
    pub analytics_service: Arc<AnalyticsService<dyn RegistryStorage>>,
    /// Origin used for `shortUrl`; falls back to the request `Origin` header.
    pub base_url: Option<String>,
}

impl AppState {
    /// Wires the services around a storage backend and user-agent classifier.
    pub fn new(
        storage: Arc<dyn RegistryStorage>,
        classifier: Arc<dyn UserAgentClassifier>,
        base_url: Option<String>,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(storage, classifier));
        let analytics_service = Arc::new(AnalyticsService::new(link_service.clone()));

        Self {
            link_service,
            analytics_service,
            base_url,
        }
    }
}

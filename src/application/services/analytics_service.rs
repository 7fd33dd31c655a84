//! Click analytics service.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::analytics::{self, AnalyticsView};
use crate::domain::entities::LinkSummary;
use crate::domain::repositories::RegistryStorage;
use crate::error::AppError;

/// Registry-wide totals for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub total_urls: usize,
    pub total_clicks: u64,
    pub urls: Vec<LinkSummary>,
}

/// Read-only service computing analytics from stored click logs.
///
/// Views are derived on every call; nothing is cached.
pub struct AnalyticsService<S: RegistryStorage + ?Sized> {
    links: Arc<LinkService<S>>,
}

impl<S: RegistryStorage + ?Sized> AnalyticsService<S> {
    pub fn new(links: Arc<LinkService<S>>) -> Self {
        Self { links }
    }

    /// Builds the analytics view for one link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    /// Returns [`AppError::Storage`] on load failure.
    pub async fn summarize(&self, short_id: &str) -> Result<AnalyticsView, AppError> {
        let record = self.links.resolve(short_id).await?;
        Ok(analytics::summarize(&record))
    }

    /// Totals across every link, with per-link summaries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on load failure.
    pub async fn overview(&self) -> Result<Overview, AppError> {
        let urls = self.links.list_all().await?;
        let total_clicks = urls.iter().map(|s| s.click_count).sum();

        Ok(Overview {
            total_urls: urls.len(),
            total_clicks,
            urls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client_metadata::ClientMetadata;
    use crate::domain::registry::Registry;
    use crate::domain::repositories::MockRegistryStorage;
    use crate::domain::user_agent::{DeviceInfo, MockUserAgentClassifier};
    use crate::infrastructure::persistence::MemoryStorage;
    use serde_json::json;

    fn classifier_reporting(browser: &'static str) -> MockUserAgentClassifier {
        let mut classifier = MockUserAgentClassifier::new();
        classifier.expect_classify().returning(move |_| DeviceInfo {
            browser: Some(browser.to_string()),
            ..Default::default()
        });
        classifier
    }

    fn service_with(
        classifier: MockUserAgentClassifier,
    ) -> (Arc<LinkService<MemoryStorage>>, AnalyticsService<MemoryStorage>) {
        let links = Arc::new(LinkService::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(classifier),
        ));
        (links.clone(), AnalyticsService::new(links))
    }

    #[tokio::test]
    async fn test_summarize_reflects_recorded_clicks() {
        let (links, analytics) = service_with(classifier_reporting("Chrome"));
        links
            .create_link("https://example.com".to_string(), Some("abc".to_string()))
            .await
            .unwrap();

        for _ in 0..3 {
            links
                .visit("abc", ClientMetadata::new(None, Some("Mozilla/5.0"), None))
                .await
                .unwrap();
        }

        let view = analytics.summarize("abc").await.unwrap();

        assert_eq!(view.total_clicks, 3);
        assert_eq!(view.top_browsers, vec![("Chrome".to_string(), 3)]);
        assert_eq!(view.recent_clicks.len(), 3);
        assert_eq!(view.clicks_by_day.values().sum::<u64>(), 3);
    }

    #[tokio::test]
    async fn test_summarize_missing_link() {
        let (_, analytics) = service_with(MockUserAgentClassifier::new());

        let result = analytics.summarize("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_overview_totals() {
        let (links, analytics) = service_with(classifier_reporting("Firefox"));
        for alias in ["one", "two"] {
            links
                .create_link("https://example.com".to_string(), Some(alias.to_string()))
                .await
                .unwrap();
        }
        links.visit("two", ClientMetadata::default()).await.unwrap();
        links.visit("two", ClientMetadata::default()).await.unwrap();

        let overview = analytics.overview().await.unwrap();

        assert_eq!(overview.total_urls, 2);
        assert_eq!(overview.total_clicks, 2);
        assert_eq!(overview.urls[0].short_id, "one");
        assert_eq!(overview.urls[1].click_count, 2);
    }

    #[tokio::test]
    async fn test_overview_empty_registry() {
        let mut storage = MockRegistryStorage::new();
        storage
            .expect_load()
            .times(1)
            .returning(|| Ok(Registry::new()));

        let links = Arc::new(LinkService::new(
            Arc::new(storage),
            Arc::new(MockUserAgentClassifier::new()),
        ));
        let analytics = AnalyticsService::new(links);

        let overview = analytics.overview().await.unwrap();

        assert_eq!(overview.total_urls, 0);
        assert_eq!(overview.total_clicks, 0);
        assert!(overview.urls.is_empty());
    }

    #[tokio::test]
    async fn test_overview_storage_error() {
        let mut storage = MockRegistryStorage::new();
        storage
            .expect_load()
            .returning(|| Err(AppError::storage("Registry document is corrupt", json!({}))));

        let links = Arc::new(LinkService::new(
            Arc::new(storage),
            Arc::new(MockUserAgentClassifier::new()),
        ));
        let analytics = AnalyticsService::new(links);

        assert!(matches!(
            analytics.overview().await.unwrap_err(),
            AppError::Storage { .. }
        ));
    }
}

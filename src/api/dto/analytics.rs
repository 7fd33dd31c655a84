//! DTOs for analytics endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use super::links::LinkSummaryItem;
use crate::application::services::Overview;
use crate::domain::analytics::{AnalyticsView, BrowserCount, ClicksByDay};

/// Analytics for a single link.
///
/// `topBrowsers` serializes as `[name, count]` pairs, highest count first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub short_id: String,
    pub original_url: String,
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub clicks_by_day: ClicksByDay,
    pub top_browsers: Vec<BrowserCount>,
    pub recent_clicks: Vec<ClickInfo>,
}

impl From<AnalyticsView> for AnalyticsResponse {
    fn from(view: AnalyticsView) -> Self {
        Self {
            short_id: view.short_id,
            original_url: view.original_url,
            total_clicks: view.total_clicks,
            created_at: view.created_at,
            clicks_by_day: view.clicks_by_day,
            top_browsers: view.top_browsers,
            recent_clicks: view.recent_clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

/// Totals across every link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub total_urls: usize,
    pub total_clicks: u64,
    pub urls: Vec<LinkSummaryItem>,
}

impl From<Overview> for OverviewResponse {
    fn from(overview: Overview) -> Self {
        Self {
            total_urls: overview.total_urls,
            total_clicks: overview.total_clicks,
            urls: overview.urls.into_iter().map(LinkSummaryItem::from).collect(),
        }
    }
}

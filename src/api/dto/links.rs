//! DTOs for the link list endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::LinkSummary;

/// Query parameters accepted by `GET /api/shorten`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortIdQuery {
    pub short_id: Option<String>,
}

/// Dashboard row for one link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummaryItem {
    pub short_id: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkSummary> for LinkSummaryItem {
    fn from(summary: LinkSummary) -> Self {
        Self {
            short_id: summary.short_id,
            original_url: summary.original_url,
            clicks: summary.click_count,
            created_at: summary.created_at,
        }
    }
}

//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ClickEvent;

/// Individual click event as shown in analytics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
    pub browser: String,
    pub operating_system: String,
    pub device_type: String,
    pub referer: String,
}

impl From<ClickEvent> for ClickInfo {
    fn from(event: ClickEvent) -> Self {
        Self {
            timestamp: event.timestamp,
            source_address: event.source_address,
            user_agent: event.user_agent_raw,
            browser: event.browser,
            operating_system: event.operating_system,
            device_type: event.device_type,
            referer: event.referer,
        }
    }
}

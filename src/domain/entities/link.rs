//! Link record: one short identifier and its click history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::click::ClickEvent;

/// A shortened URL together with its append-only click log.
///
/// The short identifier is the registry key and is not part of the serialized
/// value; [`crate::domain::registry::Registry`] restores it on load.
///
/// `click_count` and `click_log` are only mutated together through
/// [`LinkRecord::record_click`], so the count always equals the log length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    #[serde(skip)]
    pub short_id: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    click_count: u64,
    #[serde(default)]
    click_log: Vec<ClickEvent>,
}

impl LinkRecord {
    /// Creates a record with no clicks.
    pub fn new(short_id: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_id,
            original_url,
            created_at,
            click_count: 0,
            click_log: Vec::new(),
        }
    }

    pub fn click_count(&self) -> u64 {
        self.click_count
    }

    /// Click events in the order they were recorded.
    pub fn click_log(&self) -> &[ClickEvent] {
        &self.click_log
    }

    /// Appends a click and bumps the counter.
    pub fn record_click(&mut self, event: ClickEvent) {
        self.click_log.push(event);
        self.click_count += 1;
    }

    /// Returns true when the stored counter matches the log length.
    pub fn is_consistent(&self) -> bool {
        usize::try_from(self.click_count).is_ok_and(|count| count == self.click_log.len())
    }

    pub fn summary(&self) -> LinkSummary {
        LinkSummary {
            short_id: self.short_id.clone(),
            original_url: self.original_url.clone(),
            click_count: self.click_count,
            created_at: self.created_at,
        }
    }
}

/// Dashboard row: a link without its click log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSummary {
    pub short_id: String,
    pub original_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

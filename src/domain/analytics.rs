//! Read-side rollups over a link's click log.
//!
//! Every function here is pure and recomputed on each call; nothing is cached
//! or persisted.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};

use crate::domain::entities::{ClickEvent, LinkRecord, UNKNOWN};

/// Number of browsers reported by [`summarize`].
pub const TOP_BROWSERS_LIMIT: usize = 5;

/// Number of events reported by [`summarize`].
pub const RECENT_CLICKS_LIMIT: usize = 10;

/// Window used by dashboards showing the last active days.
pub const ACTIVE_DAYS_WINDOW: usize = 7;

/// Click totals keyed by UTC calendar day (`YYYY-MM-DD`), ascending.
pub type ClicksByDay = BTreeMap<String, u64>;

/// `(browser, count)` pair.
pub type BrowserCount = (String, u64);

/// Derived analytics for one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsView {
    pub short_id: String,
    pub original_url: String,
    pub total_clicks: u64,
    pub created_at: DateTime<Utc>,
    pub clicks_by_day: ClicksByDay,
    pub top_browsers: Vec<BrowserCount>,
    pub recent_clicks: Vec<ClickEvent>,
}

/// Groups clicks by the UTC date of their timestamp.
///
/// Days without clicks are absent, not zero-filled.
pub fn clicks_by_day(log: &[ClickEvent]) -> ClicksByDay {
    let mut days = ClicksByDay::new();
    for event in log {
        let day = event.timestamp.format("%Y-%m-%d").to_string();
        *days.entry(day).or_insert(0) += 1;
    }
    days
}

/// The last `n` active days, oldest first.
pub fn last_active_days(days: &ClicksByDay, n: usize) -> Vec<(String, u64)> {
    let skip = days.len().saturating_sub(n);
    days.iter()
        .skip(skip)
        .map(|(day, count)| (day.clone(), *count))
        .collect()
}

/// Most common browsers, highest count first.
///
/// Ties keep the order in which browsers first appear in the log.
pub fn top_browsers(log: &[ClickEvent], limit: usize) -> Vec<BrowserCount> {
    let mut counts: Vec<BrowserCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for event in log {
        let browser = if event.browser.is_empty() {
            UNKNOWN
        } else {
            event.browser.as_str()
        };

        match positions.get(browser) {
            Some(&i) => counts[i].1 += 1,
            None => {
                positions.insert(browser, counts.len());
                counts.push((browser.to_string(), 1));
            }
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// The last `limit` clicks, most recent first.
pub fn recent_clicks(log: &[ClickEvent], limit: usize) -> Vec<ClickEvent> {
    log.iter().rev().take(limit).cloned().collect()
}

/// Builds the full analytics view for a record.
pub fn summarize(record: &LinkRecord) -> AnalyticsView {
    let log = record.click_log();

    AnalyticsView {
        short_id: record.short_id.clone(),
        original_url: record.original_url.clone(),
        total_clicks: record.click_count(),
        created_at: record.created_at,
        clicks_by_day: clicks_by_day(log),
        top_browsers: top_browsers(log, TOP_BROWSERS_LIMIT),
        recent_clicks: recent_clicks(log, RECENT_CLICKS_LIMIT),
    }
}

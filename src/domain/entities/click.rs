//! Click event recorded on every redirect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::client_metadata::ClientMetadata;
use crate::domain::user_agent::DeviceInfo;

/// Placeholder for a classification field that could not be determined.
pub const UNKNOWN: &str = "Unknown";

/// Referer recorded when the client sent none.
pub const DIRECT_REFERER: &str = "direct";

/// A single redirect traversal, stored in the link's click log.
///
/// Classification fields are always populated; anything the user-agent
/// classifier could not determine is stored as [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub source_address: Option<String>,
    pub user_agent_raw: Option<String>,
    pub browser: String,
    pub operating_system: String,
    pub device_type: String,
    pub referer: String,
}

impl ClickEvent {
    /// Builds a click event from request metadata and its user-agent classification.
    pub fn capture(client: ClientMetadata, device: DeviceInfo, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            source_address: client.address,
            user_agent_raw: client.user_agent,
            browser: or_unknown(device.browser),
            operating_system: or_unknown(device.operating_system),
            device_type: or_unknown(device.device_type),
            referer: client
                .referer
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DIRECT_REFERER.to_string()),
        }
    }
}

fn or_unknown(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_with_full_metadata() {
        let now = Utc::now();
        let client = ClientMetadata {
            address: Some("192.168.1.1".to_string()),
            user_agent: Some("Mozilla/5.0".to_string()),
            referer: Some("https://google.com".to_string()),
        };
        let device = DeviceInfo {
            browser: Some("Chrome".to_string()),
            operating_system: Some("Windows 10".to_string()),
            device_type: Some("desktop".to_string()),
        };

        let event = ClickEvent::capture(client, device, now);

        assert_eq!(event.timestamp, now);
        assert_eq!(event.source_address.as_deref(), Some("192.168.1.1"));
        assert_eq!(event.user_agent_raw.as_deref(), Some("Mozilla/5.0"));
        assert_eq!(event.browser, "Chrome");
        assert_eq!(event.operating_system, "Windows 10");
        assert_eq!(event.device_type, "desktop");
        assert_eq!(event.referer, "https://google.com");
    }

    #[test]
    fn test_capture_applies_fallbacks() {
        let event = ClickEvent::capture(
            ClientMetadata::default(),
            DeviceInfo::default(),
            Utc::now(),
        );

        assert!(event.source_address.is_none());
        assert!(event.user_agent_raw.is_none());
        assert_eq!(event.browser, UNKNOWN);
        assert_eq!(event.operating_system, UNKNOWN);
        assert_eq!(event.device_type, UNKNOWN);
        assert_eq!(event.referer, DIRECT_REFERER);
    }

    #[test]
    fn test_capture_treats_blank_values_as_missing() {
        let client = ClientMetadata {
            referer: Some(String::new()),
            ..Default::default()
        };
        let device = DeviceInfo {
            browser: Some("  ".to_string()),
            ..Default::default()
        };

        let event = ClickEvent::capture(client, device, Utc::now());

        assert_eq!(event.browser, UNKNOWN);
        assert_eq!(event.referer, DIRECT_REFERER);
    }

    #[test]
    fn test_serializes_camel_case() {
        let event = ClickEvent::capture(
            ClientMetadata::default(),
            DeviceInfo::default(),
            Utc::now(),
        );
        let value = serde_json::to_value(&event).unwrap();

        assert!(value.get("sourceAddress").is_some());
        assert!(value.get("userAgentRaw").is_some());
        assert!(value.get("operatingSystem").is_some());
        assert!(value.get("deviceType").is_some());
    }
}

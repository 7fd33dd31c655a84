//! woothee-based user-agent classifier.

use woothee::parser::Parser;

use crate::domain::user_agent::{DeviceInfo, UserAgentClassifier};

const WOOTHEE_UNKNOWN: &str = "UNKNOWN";

/// Classifies user agents with the woothee rule set.
///
/// Device categories are mapped onto `desktop`, `mobile`, `appliance`, `bot`
/// and `other`.
pub struct WootheeClassifier {
    parser: Parser,
}

impl WootheeClassifier {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }
}

impl Default for WootheeClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentClassifier for WootheeClassifier {
    fn classify(&self, user_agent: &str) -> DeviceInfo {
        let Some(result) = self.parser.parse(user_agent) else {
            return DeviceInfo::default();
        };

        DeviceInfo {
            browser: known(result.name),
            operating_system: known(result.os),
            device_type: device_type(result.category),
        }
    }
}

fn known(value: &str) -> Option<String> {
    if value.is_empty() || value == WOOTHEE_UNKNOWN {
        None
    } else {
        Some(value.to_string())
    }
}

fn device_type(category: &str) -> Option<String> {
    let mapped = match category {
        "pc" => "desktop",
        "smartphone" | "mobilephone" => "mobile",
        "appliance" => "appliance",
        "crawler" => "bot",
        "misc" => "other",
        _ => return None,
    };
    Some(mapped.to_string())
}

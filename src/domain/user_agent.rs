//! User-agent classification contract.

/// Structured classification of a raw `User-Agent` string.
///
/// `None` means the classifier could not determine the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceInfo {
    pub browser: Option<String>,
    pub operating_system: Option<String>,
    pub device_type: Option<String>,
}

/// Classifies raw user-agent strings into browser, OS and device type.
///
/// # Implementations
///
/// - [`crate::infrastructure::user_agent::WootheeClassifier`] - woothee-based parser
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UserAgentClassifier: Send + Sync {
    fn classify(&self, user_agent: &str) -> DeviceInfo;
}

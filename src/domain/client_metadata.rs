//! Request metadata captured by the HTTP layer for click tracking.

/// Client information observed on a redirect request.
///
/// Built by the redirect handler from the peer address and request headers,
/// then combined with the user-agent classification into a
/// [`crate::domain::entities::ClickEvent`]. Every field is optional because
/// clients may omit any header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientMetadata {
    /// Forwarded-for address when present, otherwise the peer address.
    pub address: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl ClientMetadata {
    pub fn new(address: Option<String>, user_agent: Option<&str>, referer: Option<&str>) -> Self {
        Self {
            address,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_metadata_full() {
        let meta = ClientMetadata::new(
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0"),
            Some("https://google.com"),
        );

        assert_eq!(meta.address, Some("192.168.1.1".to_string()));
        assert_eq!(meta.user_agent, Some("Mozilla/5.0".to_string()));
        assert_eq!(meta.referer, Some("https://google.com".to_string()));
    }

    #[test]
    fn test_client_metadata_minimal() {
        let meta = ClientMetadata::new(None, None, None);
        assert_eq!(meta, ClientMetadata::default());
    }
}

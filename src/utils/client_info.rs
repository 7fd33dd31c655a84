//! Client metadata extraction from HTTP request headers.

use axum::http::{HeaderMap, HeaderName, header};
use std::net::SocketAddr;

use crate::domain::client_metadata::ClientMetadata;

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Collects client address, user agent and referer for click tracking.
///
/// The address is the first entry of `X-Forwarded-For` when present,
/// otherwise the peer socket IP.
pub fn client_metadata_from_headers(
    headers: &HeaderMap,
    peer: Option<SocketAddr>,
) -> ClientMetadata {
    let address = forwarded_for(headers).or_else(|| peer.map(|addr| addr.ip().to_string()));

    ClientMetadata::new(
        address,
        header_str(headers, &header::USER_AGENT),
        header_str(headers, &header::REFERER),
    )
}

/// Origin used to build absolute short URLs, taken from the `Origin` header.
pub fn request_origin(headers: &HeaderMap) -> Option<String> {
    header_str(headers, &header::ORIGIN)
        .filter(|origin| !origin.is_empty() && *origin != "null")
        .map(|origin| origin.trim_end_matches('/').to_string())
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    header_str(headers, &X_FORWARDED_FOR)?
        .split(',')
        .map(str::trim)
        .find(|entry| !entry.is_empty())
        .map(str::to_string)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

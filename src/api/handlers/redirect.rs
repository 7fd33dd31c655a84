//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_info::client_metadata_from_headers;
use crate::utils::url_validator::redirect_target;

/// Redirects a short identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{shortId}`
///
/// # Request Flow
///
/// 1. Collect client address (`X-Forwarded-For` or peer), `User-Agent` and `Referer`
/// 2. Classify the user agent
/// 3. Append the click to the link's log and persist the registry
/// 4. Return 302 Found
///
/// The click is stored before the response is sent.
///
/// # Errors
///
/// Returns 404 Not Found if the short identifier doesn't exist.
/// Returns 500 if the registry cannot be read or written, or the stored
/// URL is not a valid `Location` value.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    follow_short_link(&state, &short_id, &headers, addr).await
}

/// Records a click for `short_id` and builds the redirect response.
pub(crate) async fn follow_short_link(
    state: &AppState,
    short_id: &str,
    headers: &HeaderMap,
    peer: SocketAddr,
) -> Result<Response, AppError> {
    let client = client_metadata_from_headers(headers, Some(peer));
    let visit = state.link_service.visit(short_id, client).await?;

    let location = redirect_target(&visit.original_url)?;

    debug!(short_id, browser = %visit.click.browser, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

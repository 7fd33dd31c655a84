//! Handler for listing links.

use axum::{
    Json,
    extract::{ConnectInfo, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::api::dto::links::{LinkSummaryItem, ShortIdQuery};
use crate::api::handlers::redirect::follow_short_link;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, or follows one when `shortId` is given.
///
/// # Endpoint
///
/// `GET /api/shorten`
///
/// # Query Parameters
///
/// - `shortId` (optional): behave like `GET /{shortId}` and redirect
///
/// # Response
///
/// Links in creation order:
///
/// ```json
/// [
///   {
///     "shortId": "abc123",
///     "originalUrl": "https://example.com",
///     "clicks": 3,
///     "createdAt": "2024-01-01T10:00:00Z"
///   }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortIdQuery>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    if let Some(short_id) = query.short_id.filter(|id| !id.is_empty()) {
        return follow_short_link(&state, &short_id, &headers, addr).await;
    }

    let items: Vec<LinkSummaryItem> = state
        .link_service
        .list_all()
        .await?
        .into_iter()
        .map(LinkSummaryItem::from)
        .collect();

    Ok(Json(items).into_response())
}

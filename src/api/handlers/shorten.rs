//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_info::request_origin;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "customAlias": "my-link"
/// }
/// ```
///
/// `customAlias` is optional; an empty string is the same as omitting it.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortId": "my-link",
///   "shortUrl": "https://s.example.com/my-link",
///   "originalUrl": "https://example.com/some/long/path",
///   "createdAt": "2024-01-01T10:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or alias is invalid.
/// Returns 409 Conflict if the alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.url, payload.custom_alias)
        .await?;

    let origin = state
        .base_url
        .clone()
        .or_else(|| request_origin(&headers))
        .unwrap_or_default();

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: short_url(&origin, &link.short_id),
            short_id: link.short_id,
            original_url: link.original_url,
            created_at: link.created_at,
        }),
    ))
}

fn short_url(origin: &str, short_id: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), short_id)
}

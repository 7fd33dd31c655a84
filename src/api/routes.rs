//! API route configuration.

use crate::api::handlers::{analytics_handler, list_links_handler, shorten_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`    - Create a short link
/// - `GET  /shorten`    - List links (or redirect with `?shortId=`)
/// - `GET  /analytics`  - Per-link analytics (`?shortId=`) or overall totals
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", get(list_links_handler).post(shorten_handler))
        .route("/analytics", get(analytics_handler))
}

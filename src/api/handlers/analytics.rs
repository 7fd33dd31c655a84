//! Handler for click analytics.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::api::dto::analytics::{AnalyticsResponse, OverviewResponse};
use crate::api::dto::links::ShortIdQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns analytics for one link, or totals for all links.
///
/// # Endpoint
///
/// `GET /api/analytics`
///
/// # Query Parameters
///
/// - `shortId` (optional): link to summarize
///
/// # Response
///
/// With `shortId`:
///
/// ```json
/// {
///   "shortId": "abc123",
///   "originalUrl": "https://example.com",
///   "totalClicks": 3,
///   "createdAt": "2024-01-01T10:00:00Z",
///   "clicksByDay": { "2024-01-01": 2, "2024-01-02": 1 },
///   "topBrowsers": [["Chrome", 2], ["Firefox", 1]],
///   "recentClicks": [ ... ]
/// }
/// ```
///
/// Without it: `{"totalUrls", "totalClicks", "urls": [...]}`.
///
/// # Errors
///
/// Returns 404 Not Found if the short identifier doesn't exist.
pub async fn analytics_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortIdQuery>,
) -> Result<Response, AppError> {
    match query.short_id.filter(|id| !id.is_empty()) {
        Some(short_id) => {
            let view = state.analytics_service.summarize(&short_id).await?;
            Ok(Json(AnalyticsResponse::from(view)).into_response())
        }
        None => {
            let overview = state.analytics_service.overview().await?;
            Ok(Json(OverviewResponse::from(overview)).into_response())
        }
    }
}

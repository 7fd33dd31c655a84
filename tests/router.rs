mod common;

use axum::body::{Body, to_bytes};
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, Response, StatusCode, header};
use serde_json::{Value, json};
use snaplink::routes::app_router;
use snaplink::state::AppState;
use std::net::SocketAddr;
use tower::ServiceExt;

async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Response<Body> {
    let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(addr));

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app_router(state.clone())
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_route_is_not_a_short_id() {
    let state = common::create_test_state();

    let response = send(&state, Method::GET, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_shorten_then_redirect_through_app_router() {
    let state = common::create_test_state();

    let created = send(
        &state,
        Method::POST,
        "/api/shorten",
        Some(json!({ "url": "https://example.com/full" })),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let short_id = json_body(created).await["shortId"]
        .as_str()
        .unwrap()
        .to_string();

    let response = send(&state, Method::GET, &format!("/{short_id}"), None).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers()[header::LOCATION],
        "https://example.com/full"
    );

    let link = state.link_service.resolve(&short_id).await.unwrap();
    assert_eq!(link.click_count(), 1);
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let state = common::create_test_state();
    common::create_test_link(&state, "slash", "https://example.com").await;

    let redirect = send(&state, Method::GET, "/slash/", None).await;
    assert_eq!(redirect.status(), StatusCode::FOUND);

    let overview = send(&state, Method::GET, "/api/analytics/", None).await;
    assert_eq!(overview.status(), StatusCode::OK);
    assert_eq!(json_body(overview).await["totalUrls"], 1);
}

#[tokio::test]
async fn test_api_routes_take_precedence_over_short_ids() {
    let state = common::create_test_state();
    common::create_test_link(&state, "first", "https://example.com").await;

    let response = send(&state, Method::GET, "/api/shorten", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await[0]["shortId"], "first");
}

#[tokio::test]
async fn test_unknown_short_id_is_json_not_found() {
    let state = common::create_test_state();

    let response = send(&state, Method::GET, "/missing", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"]["code"], "not_found");
}

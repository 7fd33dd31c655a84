#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use serde_json::json;
use snaplink::domain::registry::Registry;
use snaplink::domain::repositories::RegistryStorage;
use snaplink::error::AppError;
use snaplink::infrastructure::persistence::MemoryStorage;
use snaplink::infrastructure::user_agent::WootheeClassifier;
use snaplink::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::Layer;

pub const BASE_URL: &str = "https://s.test";

pub const CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
pub const FIREFOX_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";

pub fn create_test_state() -> AppState {
    create_test_state_with(Arc::new(MemoryStorage::new()), Some(BASE_URL.to_string()))
}

pub fn create_test_state_with(
    storage: Arc<dyn RegistryStorage>,
    base_url: Option<String>,
) -> AppState {
    AppState::new(storage, Arc::new(WootheeClassifier::new()), base_url)
}

pub async fn create_test_link(state: &AppState, alias: &str, url: &str) {
    state
        .link_service
        .create_link(url.to_string(), Some(alias.to_string()))
        .await
        .unwrap();
}

/// Storage whose every operation fails.
pub struct FailingStorage;

#[async_trait]
impl RegistryStorage for FailingStorage {
    async fn load(&self) -> Result<Registry, AppError> {
        Err(AppError::storage(
            "Registry document is corrupt",
            json!({ "reason": "test" }),
        ))
    }

    async fn save(&self, _registry: &Registry) -> Result<(), AppError> {
        Err(AppError::storage(
            "Failed to write registry",
            json!({ "reason": "test" }),
        ))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

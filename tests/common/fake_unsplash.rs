//! Fake Unsplash search API.
//!
//! Serves `GET /search/photos` on `127.0.0.1:0`, records every request, and answers
//! with a scripted status, body, delay, and rate-limit headers.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use imagery::config::ImageryConfig;

pub const TEST_API_KEY: &str = "test-access-key";

/// Scripted behavior of the fake provider.
#[derive(Debug, Clone)]
pub struct FakeUnsplashConfig {
    pub status: u16,
    pub body: Value,
    /// Bodies chosen by the prefix of the `query` parameter, checked before `body`.
    pub bodies_by_query: Vec<(String, Value)>,
    /// Sent verbatim instead of `body` when set.
    pub raw_body: Option<String>,
    pub delay: Option<Duration>,
    /// How many requests (from the first) get `delay`.
    pub delayed_requests: usize,
    /// `(limit, remaining, reset_epoch)`.
    pub rate_limit: Option<(u64, u64, i64)>,
}

impl Default for FakeUnsplashConfig {
    fn default() -> Self {
        Self {
            status: 200,
            body: serde_json::json!({ "total": 0, "results": [] }),
            bodies_by_query: Vec::new(),
            raw_body: None,
            delay: None,
            delayed_requests: usize::MAX,
            rate_limit: None,
        }
    }
}

impl FakeUnsplashConfig {
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    pub fn with_body_for(mut self, query_prefix: &str, body: Value) -> Self {
        self.bodies_by_query.push((query_prefix.to_string(), body));
        self
    }

    pub fn with_raw_body(mut self, body: &str) -> Self {
        self.raw_body = Some(body.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn delay_first(mut self, requests: usize) -> Self {
        self.delayed_requests = requests;
        self
    }

    pub fn with_rate_limit(mut self, limit: u64, remaining: u64, reset_epoch: i64) -> Self {
        self.rate_limit = Some((limit, remaining, reset_epoch));
        self
    }
}

/// One request as the fake saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
    pub accept_version: Option<String>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

struct FakeState {
    config: FakeUnsplashConfig,
    hits: AtomicUsize,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct FakeUnsplash {
    pub addr: SocketAddr,
    state: Arc<FakeState>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeUnsplash {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, including ones the client gave up on.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// Client configuration pointed at this server with a key and short timings.
    pub fn client_config(&self) -> ImageryConfig {
        ImageryConfig {
            request_timeout: Duration::from_millis(500),
            retry_backoff: Duration::from_millis(10),
            ..ImageryConfig::default()
        }
        .with_api_key(TEST_API_KEY)
        .with_base_url(self.url())
    }
}

impl Drop for FakeUnsplash {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn spawn_fake_unsplash(config: FakeUnsplashConfig) -> std::io::Result<FakeUnsplash> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let state = Arc::new(FakeState {
        config,
        hits: AtomicUsize::new(0),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/search/photos", get(search_photos))
        .with_state(state.clone());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    Ok(FakeUnsplash {
        addr,
        state,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

async fn search_photos(
    State(state): State<Arc<FakeState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let hit = state.hits.fetch_add(1, Ordering::SeqCst);

    let header_text = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().push(RecordedRequest {
        params: params.clone(),
        authorization: header_text(AUTHORIZATION.as_str()),
        accept_version: header_text("accept-version"),
    });

    let config = &state.config;
    if let Some(delay) = config.delay
        && hit < config.delayed_requests
    {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(config.status).unwrap_or(StatusCode::OK);
    let body = match &config.raw_body {
        Some(raw) => raw.clone(),
        None => {
            let query = params.get("query").map(String::as_str).unwrap_or("");
            config
                .bodies_by_query
                .iter()
                .find(|(prefix, _)| query.starts_with(prefix.as_str()))
                .map(|(_, body)| body)
                .unwrap_or(&config.body)
                .to_string()
        }
    };

    let mut response = (status, body).into_response();
    let response_headers = response.headers_mut();
    response_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some((limit, remaining, reset)) = config.rate_limit {
        response_headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
        response_headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
        response_headers.insert("x-ratelimit-reset", HeaderValue::from(reset));
    }

    response
}

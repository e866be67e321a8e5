#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use siterank::{api, AnalysisClient, AppState};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{Mutex, Notify};

pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Address nothing is listening on.
pub async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn record(url: &str, performance: i64, security: i64, seo: i64) -> Value {
    json!({
        "url": url,
        "performance": performance,
        "security": security,
        "seo": seo,
        "total": 999,
        "backend": "nginx",
        "protocols": "HTTP/2, TLS 1.3",
        "response_time": "234 ms",
        "performance_details": {
            "latency_ms": 233.6,
            "latency_score": 85,
            "compression": "gzip",
            "cache_control": null,
            "content_length_kb": 120,
            "broken_links": 1,
            "total_links": 40,
            "overall_score": performance
        },
        "security_details": {
            "https": true,
            "hsts": false,
            "csp": true,
            "x_content_type_options": true,
            "x_frame_options": false,
            "referrer_policy": true,
            "overall_score": security
        },
        "seo_details": {
            "has_page_title": true,
            "has_meta_description": true,
            "has_meta_tags": false,
            "has_heading_structure": true,
            "mobile_friendly": true,
            "has_canonical_tag": false,
            "has_robots_txt": true,
            "has_sitemap_xml": false,
            "image_alt_text_percentage": 87.5,
            "overall_score": seo
        }
    })
}

#[derive(Clone)]
pub struct MockService {
    pub base_url: String,
    pub hits: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<Value>>>,
    pub release: Arc<Notify>,
}

impl MockService {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn wait_for_hits(&self, expected: usize) {
        for _ in 0..200 {
            if self.hit_count() >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("analysis service never saw {expected} requests");
    }
}

struct MockState {
    status: StatusCode,
    body: String,
    gated: bool,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
    release: Arc<Notify>,
}

async fn mock_analyze(
    State(state): State<Arc<MockState>>,
    Json(request): Json<Value>,
) -> (StatusCode, String) {
    let previous = state.hits.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().await.push(request);
    if state.gated && previous == 0 {
        state.release.notified().await;
    }
    (state.status, state.body.clone())
}

async fn start(status: StatusCode, body: String, gated: bool) -> MockService {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let release = Arc::new(Notify::new());
    let state = Arc::new(MockState {
        status,
        body,
        gated,
        hits: hits.clone(),
        requests: requests.clone(),
        release: release.clone(),
    });
    let router = Router::new()
        .route("/analyze", post(mock_analyze))
        .with_state(state);

    MockService {
        base_url: serve(router).await,
        hits,
        requests,
        release,
    }
}

pub async fn mock_service(status: StatusCode, body: impl Into<String>) -> MockService {
    start(status, body.into(), false).await
}

/// Like [`mock_service`] but the first request waits for `release` before
/// answering.
pub async fn gated_mock_service(status: StatusCode, body: impl Into<String>) -> MockService {
    start(status, body.into(), true).await
}

pub async fn viewer(analyzer_url: &str) -> String {
    let client = AnalysisClient::new(analyzer_url, None).unwrap();
    let state = Arc::new(AppState::new(client));
    serve(api::router(state)).await
}

pub fn scenario_body() -> String {
    json!([record("a.com", 60, 90, 75), record("b.com", 80, 80, 80)]).to_string()
}

use axum::body::to_bytes;
use axum::extract::State;
use axum::http::{ header, Request, StatusCode, Uri };
use axum::{ Json, Router };
use chloe_tutor::llm::chat::{ new_client, ChatClient };
use chloe_tutor::llm::LlmConfig;
use serde_json::{ json, Value };
use std::net::SocketAddr;
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::{ Arc, Mutex };
use tower::ServiceExt;

pub const TEST_KEY: &str = "test-key";
pub const TEST_MODEL: &str = "gemini-test";

/// A request the fake upstream received.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub body: Value,
}

pub struct FakeUpstream {
    pub addr: SocketAddr,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta/models", self.addr)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

#[derive(Clone)]
struct UpstreamState {
    status: StatusCode,
    reply: Value,
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

async fn generate_content(
    State(state): State<UpstreamState>,
    uri: Uri,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.calls.fetch_add(1, Ordering::SeqCst);
    state.requests.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        body,
    });
    (state.status, Json(state.reply.clone()))
}

/// Start a stand-in for the generative-language API on an ephemeral port.
/// Every POST is answered with `status` and `reply`.
pub async fn spawn_upstream(status: StatusCode, reply: Value) -> FakeUpstream {
    let calls = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = UpstreamState {
        status,
        reply,
        calls: calls.clone(),
        requests: requests.clone(),
    };
    let app = Router::new().fallback(generate_content).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("fake upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream should serve");
    });

    FakeUpstream { addr, calls, requests }
}

/// Stand-in upstream that answers every POST with `status` and a
/// `text/plain` body.
pub async fn spawn_text_upstream(status: StatusCode, body: &'static str) -> FakeUpstream {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let app = Router::new().fallback(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (status, [(header::CONTENT_TYPE, "text/plain")], body)
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("fake upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream should serve");
    });

    FakeUpstream { addr, calls, requests: Arc::new(Mutex::new(Vec::new())) }
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind spare port");
    let addr = listener.local_addr().expect("spare port addr");
    drop(listener);
    format!("http://{}/v1beta/models", addr)
}

/// Upstream body wrapping `text` as the first candidate's first part.
pub fn candidate(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

pub fn client_for(base_url: String, api_key: Option<&str>) -> Arc<dyn ChatClient> {
    let config = LlmConfig {
        api_key: api_key.map(str::to_string),
        model: TEST_MODEL.to_string(),
        base_url,
        temperature: 0.7,
    };
    new_client(&config).expect("client should build")
}

/// Send a POST request and return `(status, body_json)`.
pub async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    post_raw(app, uri, payload.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(axum::body::Body::from(body))
                .expect("request build should succeed"),
        )
        .await
        .expect("app should handle request");

    let status = resp.status();
    let body = to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("response body should be readable");
    let value = serde_json::from_slice(&body).expect("response body must be json");
    (status, value)
}

/// Send a GET request and return `(status, body_text)`.
#[allow(dead_code)]
pub async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(axum::body::Body::empty())
                .expect("request build should succeed"),
        )
        .await
        .expect("app should handle request");

    let status = resp.status();
    let body = to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("response body should be readable");
    let text = String::from_utf8(body.to_vec()).expect("response body must be utf-8");
    (status, text)
}

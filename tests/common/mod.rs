#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use stackboard::api::{Transport, TransportError};
use stackboard::models::{ActionRequest, Application, Stack};

/// In-memory transport that records requests and replays queued replies.
#[derive(Default)]
pub struct FakeTransport {
    pub sent: Mutex<Vec<ActionRequest>>,
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Result<Value, TransportError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn sent(&self) -> Vec<ActionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: &ActionRequest) -> Result<Value, TransportError> {
        self.sent.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Parse("no reply queued".into())))
    }
}

/// Log sink for asserting on emitted tracing events.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn app(name: &str, stack_name: &str, url: &str, status: &str) -> Application {
    Application {
        name: name.into(),
        description: format!("{} description", name),
        stack: Stack {
            name: stack_name.into(),
            url: url.into(),
            status: status.into(),
        },
    }
}

pub fn status_body(apps: &[Application]) -> Value {
    json!({ "message": "Success.", "applicationList": apps })
}

/// State behind the mock action endpoint.
#[derive(Default)]
pub struct MockEndpoint {
    pub apps: Vec<Application>,
    pub requests: Vec<Value>,
    /// When set, every request fails with this status and message.
    pub fail_with: Option<(u16, String)>,
    /// When set, every request answers with this raw body and status 500.
    pub raw_error_body: Option<String>,
}

pub type SharedEndpoint = Arc<Mutex<MockEndpoint>>;

async fn endpoint_handler(State(shared): State<SharedEndpoint>, Json(body): Json<Value>) -> (StatusCode, String) {
    let mut ep = shared.lock().unwrap();
    ep.requests.push(body.clone());

    if let Some(raw) = ep.raw_error_body.clone() {
        return (StatusCode::INTERNAL_SERVER_ERROR, raw);
    }
    if let Some((code, message)) = ep.fail_with.clone() {
        let status = StatusCode::from_u16(code).unwrap();
        return (status, json!({ "message": message }).to_string());
    }

    let name = body.get("name").and_then(|v| v.as_str()).unwrap_or("").to_string();
    match body.get("action").and_then(|v| v.as_str()) {
        Some("status") => {
            // An empty list goes out as null, like the real endpoint.
            let list = if ep.apps.is_empty() { Value::Null } else { json!(ep.apps) };
            (StatusCode::OK, json!({ "message": "Success.", "applicationList": list }).to_string())
        }
        Some("create") => {
            if let Some(app) = ep.apps.iter_mut().find(|a| a.name == name) {
                app.stack = Stack {
                    name: format!("{}20240101120000", name),
                    url: String::new(),
                    status: "CREATE_IN_PROGRESS".into(),
                };
            }
            (StatusCode::OK, json!({ "message": "Success.", "applicationList": null }).to_string())
        }
        Some("delete") => {
            if let Some(app) = ep.apps.iter_mut().find(|a| a.stack.name == name) {
                app.stack.status = "DELETE_IN_PROGRESS".into();
            }
            (StatusCode::OK, json!({ "message": "Success.", "applicationList": null }).to_string())
        }
        _ => (StatusCode::OK, String::new()),
    }
}

/// Start the mock endpoint on an ephemeral port and return its URL.
pub async fn spawn_endpoint(shared: SharedEndpoint) -> String {
    let router = Router::new().route("/api", post(endpoint_handler)).with_state(shared);
    spawn_router(router).await + "/api"
}

/// Serve `router` on an ephemeral port and return its base URL.
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

use serde_json::Value;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use super::error::TransportError;
use crate::models::ActionRequest;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Sends one action request to the endpoint and resolves to the parsed
/// JSON body. Implementations never retry.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ActionRequest) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(&self, request: &ActionRequest) -> impl Future<Output = Result<Value, TransportError>> + Send {
        (**self).send(request)
    }
}

/// HTTP transport bound to a single endpoint URL.
#[derive(Clone, Debug)]
pub struct EndpointClient {
    client: reqwest::Client,
    endpoint_url: String,
}

impl EndpointClient {
    pub fn new(client: reqwest::Client, endpoint_url: impl Into<String>) -> Self {
        Self {
            client,
            endpoint_url: endpoint_url.into(),
        }
    }

    /// Build the underlying reqwest client. `timeout` of `None` keeps
    /// reqwest's default of no overall timeout.
    pub fn build(endpoint_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder().user_agent(format!("stackboard/{}", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self::new(builder.build()?, endpoint_url))
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

impl Transport for EndpointClient {
    async fn send(&self, request: &ActionRequest) -> Result<Value, TransportError> {
        // --- Curl Logging ---
        let body_str = serde_json::to_string(request).unwrap_or_default();
        let escaped = body_str.replace('\'', "'\\''");
        let parts = [
            Paint::new("curl").fg(yansi::Color::Green).bold().to_string(),
            format!("-X {}", Paint::new("POST").fg(yansi::Color::Yellow).bold()),
            format!("'{}'", Paint::new(&self.endpoint_url).fg(yansi::Color::Cyan)),
            format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ),
            format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped)).fg(yansi::Color::White)
            ),
        ];
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        tracing::info!(action = request.action(), endpoint = %self.endpoint_url, "Endpoint request");

        let resp = self.client.post(&self.endpoint_url).json(request).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        let result = if status.is_success() {
            serde_json::from_slice::<Value>(&bytes).map_err(|e| TransportError::Parse(e.to_string()))
        } else {
            Err(TransportError::endpoint(status.as_u16(), error_message(status, &bytes)))
        };

        match &result {
            Ok(v) => {
                let json_str = serde_json::to_string(v).unwrap_or_else(|_| format!("{:?}", v));
                log_output(format!("Response:\n{}", Paint::new(json_str).rgb(100, 100, 100)));
                tracing::info!(action = request.action(), status = status.as_u16(), "Endpoint response");
            }
            Err(e) => {
                log_output(format!("Response:\n{}", Paint::new(e.to_string()).red()));
                tracing::warn!(action = request.action(), status = status.as_u16(), error = %e, "Endpoint error response");
            }
        }
        result
    }
}

/// Pull `message` out of an error body; fall back to the status line.
fn error_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| match status.canonical_reason() {
            Some(reason) => format!("HTTP {} {}", status.as_u16(), reason),
            None => format!("HTTP {}", status.as_u16()),
        })
}

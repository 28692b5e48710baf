//! HTTP client for the MCP gateway REST API.
//!
//! One method per gateway capability, all delegating to a shared
//! send-and-decode helper. Calls are independent and stateless; the caller
//! may issue several concurrently and each resolves on its own.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{InferRequest, PolicyCheckRequest};

/// Escape set for caller-supplied values embedded in a path segment or query
/// string. RFC 3986 unreserved characters pass through, everything else is
/// percent-encoded, including `/` and space.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Client for the MCP gateway REST API.
pub struct GatewayClient {
    http_client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET /mcp/status - status for all active units.
    pub async fn status(&self) -> Result<Value> {
        self.get("/mcp/status").await
    }

    /// POST /mcp/infer - send a prompt to the inference engine.
    pub async fn infer(&self, prompt: &str) -> Result<Value> {
        let body = InferRequest {
            prompt: prompt.to_string(),
        };
        self.post("/mcp/infer", &body).await
    }

    /// GET /mcp/logs?unit=<unit> - last log lines for the named unit.
    pub async fn logs(&self, unit: &str) -> Result<Value> {
        let path = format!("/mcp/logs?unit={}", encode_component(unit));
        self.get(&path).await
    }

    /// GET /mcp/rules - rules overview.
    pub async fn rules(&self) -> Result<Value> {
        self.get("/mcp/rules").await
    }

    /// POST /mcp/rules/check - check a policy against the loaded rules.
    pub async fn check_policy(&self, policy: &str) -> Result<Value> {
        let body = PolicyCheckRequest {
            policy: policy.to_string(),
        };
        self.post("/mcp/rules/check", &body).await
    }

    /// GET /mcp/state/<area> - state snapshot for the named area.
    ///
    /// The area value is encoded as a single path segment, so a slash in the
    /// name stays inside the segment instead of splitting the path.
    pub async fn state(&self, area: &str) -> Result<Value> {
        let path = format!("/mcp/state/{}", encode_component(area));
        self.get(&path).await
    }

    /// GET /health - gateway health check.
    pub async fn health(&self) -> Result<Value> {
        self.get("/health").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let request = self
            .http_client
            .get(self.url(path))
            .header(CONTENT_TYPE, "application/json");
        self.send(request).await
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Value> {
        // .json() sets Content-Type: application/json on its own.
        let request = self.http_client.post(self.url(path)).json(body);
        self.send(request).await
    }

    /// Send a request and decode the JSON response.
    ///
    /// Every failure is logged once and propagated unchanged. No retry, no
    /// backoff; the call is terminal either way.
    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Gateway request failed: {}", e);
                return Err(Error::Transport(e));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let error = Error::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
            };
            tracing::error!("Gateway request failed: {}", error);
            return Err(error);
        }

        match response.json().await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!("Failed to decode gateway response: {}", e);
                Err(Error::Transport(e))
            }
        }
    }
}

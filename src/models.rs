//! Request payloads for the gateway API.
//!
//! Responses are passed through untyped as `serde_json::Value`; only the two
//! POST bodies have a fixed shape.

use serde::{Deserialize, Serialize};

/// Body for `POST /mcp/infer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferRequest {
    pub prompt: String,
}

/// Body for `POST /mcp/rules/check`.
///
/// `policy` is the policy file name or content, forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyCheckRequest {
    pub policy: String,
}

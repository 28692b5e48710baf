//! Client library for the MCP gateway REST API.
//!
//! Wraps the gateway's `/mcp/*` endpoints (status, inference, logs, rules,
//! policy checks, state snapshots) behind [`GatewayClient`]. Responses are
//! returned as untyped JSON; failures carry the HTTP status or the underlying
//! transport error.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::GatewayClient;
pub use config::Config;
pub use error::{Error, Result};
pub use models::{InferRequest, PolicyCheckRequest};

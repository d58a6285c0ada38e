//! Odoo JSON-RPC envelope
//!
//! Requests are always `{"jsonrpc": "2.0", "method": "call", ...}` with the
//! target service, method and positional args under `params`. A reply is a
//! success only when it carries no `error` key, whatever the HTTP status said.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Path of the JSON-RPC endpoint on an Odoo server
pub const RPC_PATH: &str = "/jsonrpc";

#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    jsonrpc: &'static str,
    method: &'static str,
    params: RpcParams,
    id: u64,
}

#[derive(Debug, Clone, Serialize)]
struct RpcParams {
    service: &'static str,
    method: &'static str,
    args: Vec<Value>,
}

impl RpcRequest {
    pub fn call(service: &'static str, method: &'static str, args: Vec<Value>, id: u64) -> Self {
        Self {
            jsonrpc: "2.0",
            method: "call",
            params: RpcParams {
                service,
                method,
                args,
            },
            id,
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Error object returned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcError {
    /// `error.data.message`, when the server sent one
    pub message: Option<String>,
    pub raw: Value,
}

impl RpcError {
    fn from_value(raw: Value) -> Self {
        let message = raw
            .get("data")
            .and_then(|d| d.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { message, raw }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => write!(f, "{}", self.raw),
        }
    }
}

/// Classified JSON-RPC reply
#[derive(Debug, Clone, PartialEq)]
pub enum RpcResponse {
    Success(Value),
    Failure(RpcError),
}

impl RpcResponse {
    /// Classify a decoded body. Anything that is not an object is a success
    /// with a null result, since Odoo never sends bare values.
    pub fn from_value(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.remove("error") {
                Some(error) => Self::Failure(RpcError::from_value(error)),
                None => Self::Success(map.remove("result").unwrap_or(Value::Null)),
            },
            _ => Self::Success(Value::Null),
        }
    }
}

/// Build the endpoint URL for an Odoo server on localhost
pub fn endpoint(port: u16) -> String {
    format!("http://localhost:{}{}", port, RPC_PATH)
}

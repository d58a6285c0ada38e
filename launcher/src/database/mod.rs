//! Database provisioning over Odoo's JSON-RPC API
//!
//! - Creating the initial database (retried once)
//! - Renaming the bootstrap admin account (best effort, never retried)

mod admin;
mod provision;

pub use admin::{rename_admin, RenameError, RENAME_TIMEOUT};
pub use provision::{
    create_database, ProvisionError, Provisioned, CREATE_ATTEMPTS, CREATE_TIMEOUT, DEFAULT_ADMIN,
};

use crate::http::{HttpClient, TransportError};
use crate::rpc::{self, RpcError, RpcRequest, RpcResponse};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Why a single RPC round-trip did not produce a result
#[derive(Debug, Error)]
pub enum CallError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Remote(RpcError),
    #[error("invalid JSON body: {0}")]
    Decode(String),
}

/// Send one envelope and return its `result`.
async fn call<C: HttpClient>(
    client: &C,
    port: u16,
    request: &RpcRequest,
    timeout: Duration,
) -> Result<Value, CallError> {
    let reply = client
        .post_json(&rpc::endpoint(port), &request.to_json(), timeout)
        .await?;

    if !reply.is_ok() {
        return Err(CallError::Status {
            status: reply.status,
            body: reply.body,
        });
    }

    let body: Value =
        serde_json::from_str(&reply.body).map_err(|e| CallError::Decode(e.to_string()))?;

    match RpcResponse::from_value(body) {
        RpcResponse::Success(result) => Ok(result),
        RpcResponse::Failure(error) => Err(CallError::Remote(error)),
    }
}

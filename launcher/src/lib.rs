//! Odoo deployment helper
//!
//! Creates the initial database through Odoo's JSON-RPC API, optionally
//! renames the bootstrap admin, and waits for `/web/health` to pass.

pub mod config;
pub mod database;
pub mod deploy;
pub mod health;
pub mod http;
pub mod report;
pub mod rpc;

#[cfg(test)]
mod testing;

pub use common::{init_logging, ConfigExt};
pub use config::Config;
pub use deploy::{run, DeployOutcome};
pub use http::{HttpClient, ReqwestClient};
pub use report::{Reporter, TracingReporter};

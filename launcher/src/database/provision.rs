//! Initial database creation

use super::{call, rename_admin, CallError};
use crate::config::Config;
use crate::http::HttpClient;
use crate::report::Reporter;
use crate::rpc::RpcRequest;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Login of the account Odoo creates with every new database
pub const DEFAULT_ADMIN: &str = "admin";

/// Total attempts, the first one included
pub const CREATE_ATTEMPTS: u32 = 2;

/// Database creation installs the base modules and routinely takes minutes.
pub const CREATE_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    /// Credentials were not configured; nothing was sent
    Skipped,
}

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("database creation failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: CallError,
    },
}

/// Create the configured database, then rename the bootstrap admin if a
/// different user name is configured.
///
/// Missing credentials are a skip, not an error. Every failure (transport,
/// non-200 status or an error envelope) consumes one attempt; the last one is
/// returned to the caller.
pub async fn create_database<C: HttpClient>(
    config: &Config,
    port: u16,
    client: &C,
    reporter: &dyn Reporter,
) -> Result<Provisioned, ProvisionError> {
    let Some((db_name, master_password, user_password)) = config.creation_credentials() else {
        reporter.warning("No database credentials provided, skipping database creation");
        return Ok(Provisioned::Skipped);
    };

    reporter.status(&format!("Creating database '{}'", db_name));

    let request = RpcRequest::call(
        "db",
        "create_database",
        vec![
            json!(master_password),
            json!(db_name),
            json!(false),
            json!(config.locale),
            json!(user_password),
        ],
        1,
    );

    let mut attempt = 1;
    loop {
        match call(client, port, &request, CREATE_TIMEOUT).await {
            Ok(_) => break,
            Err(e) if attempt < CREATE_ATTEMPTS => {
                reporter.warning(&format!(
                    "Failed to create database (attempt {}/{}): {}, retrying",
                    attempt, CREATE_ATTEMPTS, e
                ));
                attempt += 1;
            }
            Err(source) => {
                reporter.error(&format!("Failed to create database: {}", source));
                return Err(ProvisionError::Exhausted {
                    attempts: attempt,
                    source,
                });
            }
        }
    }

    if config
        .user_name
        .as_deref()
        .is_some_and(|user| user != DEFAULT_ADMIN)
    {
        // Already reported; a failed rename leaves the database usable.
        let _ = rename_admin(config, port, client, reporter).await;
    }

    reporter.success(&format!("Database '{}' created successfully", db_name));
    Ok(Provisioned::Created)
}

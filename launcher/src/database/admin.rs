//! Bootstrap admin renaming
//!
//! Logs in as `admin` with the configured password, then rewrites that
//! user's login and display name in `res.users`.

use super::{call, CallError, DEFAULT_ADMIN};
use crate::config::Config;
use crate::http::HttpClient;
use crate::report::Reporter;
use crate::rpc::RpcRequest;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

pub const RENAME_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Database name, user name and user password are required to rename the admin user")]
    MissingSettings,
    #[error("Failed to authenticate: {0}")]
    Authenticate(#[source] CallError),
    #[error("Failed to get user ID")]
    MissingUid,
    #[error("Failed to update user: {0}")]
    Update(#[source] CallError),
}

/// Rename the bootstrap admin to the configured user name.
///
/// Neither step is retried. Every failure is reported before it is returned,
/// so callers that only care about the log may discard the result.
pub async fn rename_admin<C: HttpClient>(
    config: &Config,
    port: u16,
    client: &C,
    reporter: &dyn Reporter,
) -> Result<(), RenameError> {
    let result = rename(config, port, client, reporter).await;
    if let Err(e) = &result {
        reporter.error(&e.to_string());
    }
    result
}

async fn rename<C: HttpClient>(
    config: &Config,
    port: u16,
    client: &C,
    reporter: &dyn Reporter,
) -> Result<(), RenameError> {
    let (Some(db_name), Some(user_name), Some(password)) = (
        config.db_name.as_deref(),
        config.user_name.as_deref(),
        config.user_password.as_deref(),
    ) else {
        return Err(RenameError::MissingSettings);
    };

    reporter.status(&format!("Updating admin user login to '{}'", user_name));

    let auth = RpcRequest::call(
        "common",
        "authenticate",
        vec![json!(db_name), json!(DEFAULT_ADMIN), json!(password), json!({})],
        1,
    );
    let result = call(client, port, &auth, RENAME_TIMEOUT)
        .await
        .map_err(RenameError::Authenticate)?;
    let uid = user_id(&result).ok_or(RenameError::MissingUid)?;

    let update = RpcRequest::call(
        "object",
        "execute",
        vec![
            json!(db_name),
            json!(uid),
            json!(password),
            json!("res.users"),
            json!("write"),
            json!([uid]),
            json!({ "login": user_name, "name": user_name }),
        ],
        2,
    );
    call(client, port, &update, RENAME_TIMEOUT)
        .await
        .map_err(RenameError::Update)?;

    reporter.success(&format!("Admin user updated to '{}'", user_name));
    Ok(())
}

/// Odoo answers a failed login with `false`, never with an error.
fn user_id(result: &Value) -> Option<u64> {
    result.as_u64().filter(|&uid| uid != 0)
}

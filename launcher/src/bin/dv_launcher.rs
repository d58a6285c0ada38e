//! Odoo database initializer
//!
//! Runs after the containers are up: creates the initial database, renames
//! the bootstrap admin and waits for the health endpoint.
//! Reads `DV_LAUNCHER_CONFIG` (YAML) when set, the environment otherwise.

use anyhow::{Context, Result};
use launcher::{init_logging, run, Config, ReqwestClient, TracingReporter};
use std::env;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match env::var("DV_LAUNCHER_CONFIG") {
        Ok(path) => Config::from_file(&path)?,
        Err(_) => Config::from_env(),
    };

    let _guard = init_logging("dv-launcher", config.colored_output);
    info!(port = config.port, locale = %config.locale, "dv-launcher starting");

    let client = ReqwestClient::new().context("Failed to build HTTP client")?;
    let outcome = match run(&config, &client, &TracingReporter).await {
        Ok(outcome) => outcome,
        Err(e) => {
            // The provisioner already reported the failure.
            debug!(error = %e, "Deployment failed");
            std::process::exit(1);
        }
    };

    if !outcome.is_healthy() {
        std::process::exit(1);
    }

    Ok(())
}

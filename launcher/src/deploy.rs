//! Deployment orchestration
//!
//! Provisioning runs to completion (retry and admin rename included) before
//! the health wait starts. Nothing here runs concurrently.

use crate::config::Config;
use crate::database::{create_database, ProvisionError, Provisioned};
use crate::health::HealthProbe;
use crate::http::HttpClient;
use crate::report::Reporter;
use std::time::Instant;
use tracing::debug;

/// Terminal state of a deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployOutcome {
    pub provisioned: Provisioned,
    pub healthy: bool,
}

impl DeployOutcome {
    pub fn is_healthy(&self) -> bool {
        self.healthy
    }
}

/// Provision the database, then wait for the service with the default probe.
pub async fn run<C: HttpClient>(
    config: &Config,
    client: &C,
    reporter: &dyn Reporter,
) -> Result<DeployOutcome, ProvisionError> {
    run_with_probe(config, client, reporter, &HealthProbe::default()).await
}

pub async fn run_with_probe<C: HttpClient>(
    config: &Config,
    client: &C,
    reporter: &dyn Reporter,
    probe: &HealthProbe,
) -> Result<DeployOutcome, ProvisionError> {
    let start = Instant::now();
    reporter.header(&format!("Initializing Odoo on port {}", config.port));

    let provisioned = create_database(config, config.port, client, reporter).await?;
    let healthy = probe.wait_until_healthy(config, client, reporter).await;

    debug!(
        ?provisioned,
        healthy,
        duration_ms = start.elapsed().as_millis() as u64,
        "Deployment finished"
    );

    Ok(DeployOutcome {
        provisioned,
        healthy,
    })
}

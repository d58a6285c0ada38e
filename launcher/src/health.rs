//! Odoo health checking
//!
//! Polls `/web/health` until the server reports `{"status": "pass"}` or the
//! attempt budget runs out.

use crate::config::Config;
use crate::http::{HttpClient, HttpReply};
use crate::report::Reporter;
use std::time::Duration;
use tokio::time::sleep;

/// Path of Odoo's health endpoint
pub const HEALTH_PATH: &str = "/web/health";

/// What a single poll observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// No response at all
    Unreachable,
    /// HTTP 200 with a `status` field
    Reporting { passing: bool },
    /// Any other response, redirects included
    Unknown,
}

impl HealthStatus {
    pub fn from_reply(reply: &HttpReply) -> Self {
        if !reply.is_ok() {
            return Self::Unknown;
        }
        match reply.json().as_ref().and_then(|v| v.get("status")) {
            Some(status) => Self::Reporting {
                passing: status.as_str() == Some("pass"),
            },
            None => Self::Unknown,
        }
    }

    pub fn is_healthy(self) -> bool {
        self == Self::Reporting { passing: true }
    }
}

/// Polling budget for [`HealthProbe::wait_until_healthy`]
#[derive(Debug, Clone, Copy)]
pub struct HealthProbe {
    pub attempts: u32,
    pub interval: Duration,
    pub request_timeout: Duration,
}

impl Default for HealthProbe {
    fn default() -> Self {
        Self {
            attempts: 20,
            interval: Duration::from_millis(250),
            request_timeout: Duration::from_secs(1),
        }
    }
}

impl HealthProbe {
    /// Total time spent sleeping when every attempt fails
    pub fn budget(&self) -> Duration {
        self.interval * self.attempts
    }

    /// Poll once and classify the result
    pub async fn check<C: HttpClient>(&self, client: &C, url: &str) -> HealthStatus {
        match client.get(url, self.request_timeout).await {
            Ok(reply) => HealthStatus::from_reply(&reply),
            Err(_) => HealthStatus::Unreachable,
        }
    }

    /// Block until the server reports healthy. Never fails, only reports.
    pub async fn wait_until_healthy<C: HttpClient>(
        &self,
        config: &Config,
        client: &C,
        reporter: &dyn Reporter,
    ) -> bool {
        let url = format!("http://localhost:{}{}", config.port, HEALTH_PATH);

        reporter.status(&format!(
            "Checking odoo state on: {} for {:.2} seconds",
            url,
            self.budget().as_secs_f64()
        ));

        for _ in 0..self.attempts {
            if self.check(client, &url).await.is_healthy() {
                reporter.success(&format!(
                    "Odoo is working properly on: http://localhost:{}",
                    config.port
                ));
                return true;
            }
            sleep(self.interval).await;
        }

        reporter.error(&format!(
            "Service not available on {} after {:.2} seconds, check service logs",
            url,
            self.budget().as_secs_f64()
        ));
        false
    }
}

/// Wait for Odoo with the default budget
pub async fn wait_until_healthy<C: HttpClient>(
    config: &Config,
    client: &C,
    reporter: &dyn Reporter,
) -> bool {
    HealthProbe::default()
        .wait_until_healthy(config, client, reporter)
        .await
}

//! Reporting sink for deployment progress
//!
//! Components never log through a global; they receive a [`Reporter`] and
//! write one line per decision point to it.

use tracing::{error, info, warn};

/// Five-severity, write-only logging collaborator.
pub trait Reporter: Send + Sync {
    fn status(&self, message: &str);
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    fn header(&self, message: &str);
}

/// Reporter that forwards every line to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn status(&self, message: &str) {
        info!("{}", message);
    }

    fn success(&self, message: &str) {
        info!(outcome = "success", "{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn header(&self, message: &str) {
        info!("{}", "=".repeat(60));
        info!("{}", message);
        info!("{}", "=".repeat(60));
    }
}

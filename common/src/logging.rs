//! Console logging initialization
//!
//! Provides consistent logging initialization for the launcher binaries.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Guard that keeps the tracing subscriber active.
/// Drop this at the end of main to flush logs.
pub struct LogGuard;

/// Initialize console logging for a component.
///
/// `colored` toggles ANSI escapes; disable it when output is captured to a
/// file or a CI log. The filter defaults to `info` and honours `RUST_LOG`.
///
/// # Example
/// ```ignore
/// let _guard = init_logging("dv-launcher", true);
/// info!("Starting up...");
/// ```
pub fn init_logging(component: &str, colored: bool) -> LogGuard {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format = fmt::layer().with_target(false).with_ansi(colored);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();

    tracing::debug!(component, colored, "Logging initialized");

    LogGuard
}

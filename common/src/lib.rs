//! Shared utilities for the launcher workspace
//!
//! This crate provides ambient functionality used by the launcher:
//! - Console logging initialization
//! - Environment variable parsing helpers

pub mod config;
pub mod logging;

pub use config::ConfigExt;
pub use logging::init_logging;

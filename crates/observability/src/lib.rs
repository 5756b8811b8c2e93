//! Tracing/logging setup shared by every lab binary.

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&config::ObservabilityConfig::from_env());
}

/// Environment-driven configuration.
pub mod config;

/// Subscriber construction (filters, formats, writer).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

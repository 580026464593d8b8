//! Shared logging utilities for consistent tracing setup

use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Initialize the stdout tracing subscriber with an optional log level
///
/// The filter keeps our own crates at the requested level and quiets the
/// HTTP client internals.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let env_filter = format!("coordinator={base_level},shared={base_level},reqwest=warn");

    fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!(timestamp = format_timestamp(), "🛑 Shutting down: {}", reason);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(timestamp = format_timestamp(), "✅ {}", message);
}

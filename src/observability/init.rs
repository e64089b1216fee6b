//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the complete
//! pipeline from `tracing` macros to stderr and, optionally, a JSON log file.

use super::file_writer::RotatingFileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initializes the tracing subscriber.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans and events based on the configured trace level
/// 2. Writes compact human-readable lines to stderr
/// 3. Writes JSON lines to a rotating log file, when `log_file` is configured
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
///
/// # Initialization Behavior
///
/// - Creates the log file's directory if it doesn't exist
/// - Skips the file layer if directory creation fails (logging to a file is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use dataset_explorer::observability::init_tracing;
/// use dataset_explorer::Config;
///
/// let config = Config {
///     trace_level: "debug".to_string(),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.trace_level));

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = config.log_file.as_ref().and_then(|path| {
        let path = crate::infrastructure::expand_tilde(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if std::fs::create_dir_all(parent).is_err() {
                return None;
            }
        }
        let writer = Arc::new(RotatingFileWriter::new(path));
        Some(fmt::layer().json().with_current_span(true).with_writer(writer).boxed())
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

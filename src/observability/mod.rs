//! Structured logging with optional file output.
//!
//! This module provides the tracing infrastructure for the explorer. Events
//! and spans emitted with the `tracing` macros go to stderr in compact form
//! and, when configured, to a JSON log file for offline analysis.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt (compact) → stderr
//!                            └→ fmt (json) → RotatingFileWriter → log file
//! ```
//!
//! # Features
//!
//! - **File Output**: JSON lines written to `log_file` when configured
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::init_tracing;

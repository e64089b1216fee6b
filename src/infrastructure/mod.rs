//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves platform paths (config file, download and log
//! directories) and parses the page-load query string.

pub mod paths;
pub mod query_string;

pub use paths::{config_file_path, data_dir, default_download_dir, expand_tilde};
pub use query_string::query_param;

//! Dataset Explorer: a controller for a dataset search-and-selection page.
//!
//! Dataset Explorer drives the explore page of a dataset repository:
//! - Incremental search from filter inputs, with stale responses discarded
//! - Result cards rendered from a typed view model into escaped HTML
//! - A selection cart kept consistent across every surface that shows it
//! - Create-from-cart (multipart form) and download-cart (JSON, archive) workflows

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command loop (main.rs)                             │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Selection store                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ Worker Layer  │
//! │ (ui/)         │                       │ (worker/)     │
//! │ - HTML render │                       │ - HTTP client │
//! │ - Components  │                       │ - Async tasks │
//! └───────────────┘                       └───────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths, query string (infrastructure/)   │
//! │  - Error types (domain/error)                       │
//! │  - Datasets and criteria (domain/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating JSON log file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (datasets, criteria, errors)
//! - [`infrastructure`]: Platform paths and query-string parsing
//! - [`worker`]: Background request execution
//! - [`ui`]: View model and HTML rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! # ~/.config/dataset-explorer/config.toml
//! base_url = "http://localhost:5000"
//! csrf_token = "..."
//! download_dir = "~/Downloads"
//! request_timeout_secs = 30
//! trace_level = "info"
//! log_file = "explorer.log"  # relative to the platform data directory
//! ```
//!
//! Environment variables (`DATASET_EXPLORER_BASE_URL`,
//! `DATASET_EXPLORER_CSRF_TOKEN`, `DATASET_EXPLORER_TRACE_LEVEL`) override the
//! file; command-line flags override both.
//!
//! # Examples
//!
//! ```rust
//! use dataset_explorer::{handle_event, initialize, Action, Config, Event};
//! use dataset_explorer::domain::DatasetId;
//!
//! let mut state = initialize(&Config::default());
//!
//! let (_, actions) = handle_event(&mut state, &Event::PageLoaded { query: None })?;
//! assert!(matches!(actions[..], [Action::PostToWorker(_)]));
//!
//! handle_event(&mut state, &Event::AddToSelection { id: DatasetId(3), title: "Phones".into() })?;
//! assert_eq!(state.compute_viewmodel().selection.hidden_ids, "3");
//! # Ok::<(), dataset_explorer::ExplorerError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event};
pub use domain::{ExplorerError, Result};

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding [`Config::base_url`].
pub const ENV_BASE_URL: &str = "DATASET_EXPLORER_BASE_URL";
/// Environment variable overriding [`Config::csrf_token`].
pub const ENV_CSRF_TOKEN: &str = "DATASET_EXPLORER_CSRF_TOKEN";
/// Environment variable overriding [`Config::trace_level`].
pub const ENV_TRACE_LEVEL: &str = "DATASET_EXPLORER_TRACE_LEVEL";

/// Explorer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server the explore endpoints live on. Default: `http://localhost:5000`
    pub base_url: String,

    /// CSRF token echoed back on every request. Default: empty
    pub csrf_token: String,

    /// Directory downloaded archives are saved to.
    ///
    /// Default: the platform download directory, or `./downloads`.
    pub download_dir: PathBuf,

    /// Per-request timeout in seconds. Default: 30
    pub request_timeout_secs: u64,

    /// Tracing level or filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: String,

    /// Optional JSON log file. A relative path is placed under the platform
    /// data directory, e.g. `~/.local/share/dataset-explorer/`.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            csrf_token: String::new(),
            download_dir: infrastructure::default_download_dir(),
            request_timeout_secs: 30,
            trace_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] for invalid TOML or mistyped values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dataset_explorer::Config;
    ///
    /// let config = Config::from_toml_str("base_url = \"https://example.org\"")?;
    /// assert_eq!(config.base_url, "https://example.org");
    /// assert_eq!(config.request_timeout_secs, 30);
    /// # Ok::<(), dataset_explorer::ExplorerError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text).map_err(|e| ExplorerError::Config(e.to_string()))?;
        config.download_dir = infrastructure::expand_tilde(&config.download_dir);
        config.log_file = config.log_file.as_deref().map(resolve_log_file);
        Ok(config)
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ExplorerError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
            .map_err(|e| ExplorerError::Config(format!("{}: {e}", path.display())))
    }

    /// Resolves configuration from defaults, a config file and the environment.
    ///
    /// An explicit `path` must exist. Without one, the platform config file is
    /// used when present.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] if a config file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match infrastructure::config_file_path().filter(|p| p.is_file()) {
                Some(default_path) => Self::from_file(&default_path)?,
                None => Self::default(),
            },
        };
        config.apply_env_from(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Applies overrides from an environment lookup. Blank values are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dataset_explorer::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_from(|key| (key == "DATASET_EXPLORER_TRACE_LEVEL").then(|| "debug".to_string()));
    /// assert_eq!(config.trace_level, "debug");
    /// ```
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(csrf_token) = get(ENV_CSRF_TOKEN) {
            self.csrf_token = csrf_token;
        }
        if let Some(trace_level) = get(ENV_TRACE_LEVEL) {
            self.trace_level = trace_level;
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn resolve_log_file(path: &Path) -> PathBuf {
    let path = infrastructure::expand_tilde(path);
    if path.is_relative() {
        infrastructure::data_dir().join(path)
    } else {
        path
    }
}

/// Creates the page state for a configuration.
///
/// The state starts as right after page load, before the initial search:
/// default filters, no results, empty selection.
///
/// # Example
///
/// ```rust
/// use dataset_explorer::{initialize, Config};
///
/// let config = Config {
///     csrf_token: "abc".to_string(),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.csrf_token, "abc");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, "initializing dataset explorer");

    AppState::new(config.csrf_token.clone())
}

//! Worker message types for the request/response protocol.
//!
//! The event handler never performs I/O itself: it emits a [`WorkerMessage`]
//! describing one outbound request, and the worker answers with a
//! [`WorkerResponse`] that re-enters the handler as an event. Request bodies
//! serialize to exactly the JSON the explore endpoints expect.

use crate::domain::{DatasetId, DatasetSummary, ExplorerError, PublicationTypeFilter, Sorting};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Body of `POST /explore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub csrf_token: String,
    pub query: String,
    pub publication_type: PublicationTypeFilter,
    pub sorting: Sorting,
}

/// Fields of the `POST /explore/create-dataset-from-cart` multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFromCartRequest {
    pub title: String,
    pub description: String,
    pub publication_type: String,
    /// Delimited tag text, passed through as typed.
    pub tags: String,
    /// Comma-joined selected ids (the hidden form field).
    pub selected_datasets: String,
    pub csrf_token: String,
    /// Files sent as opaque `files` parts.
    pub attachments: Vec<PathBuf>,
}

/// JSON body of `POST /explore/download_cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadCartRequest {
    pub dataset_ids: Vec<DatasetId>,
    pub filename: String,
}

/// Reply of the create-from-cart endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<DatasetId>,
}

/// An archive written to disk by the download workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArchive {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Why a request did not produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// Network, decode or local I/O failure.
    Transport(String),
    /// The server answered with a non-success status; the text is its body.
    Rejected(String),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(message) | Self::Rejected(message) => f.write_str(message),
        }
    }
}

impl From<ExplorerError> for Failure {
    fn from(error: ExplorerError) -> Self {
        match error {
            ExplorerError::Status { status, body } if body.trim().is_empty() => {
                Self::Rejected(format!("server returned status {status}"))
            }
            ExplorerError::Status { body, .. } => Self::Rejected(body),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Requests sent from the event handler to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Run a search. `generation` identifies the request so stale answers can be dropped.
    Search {
        generation: u64,
        request: SearchRequest,
    },

    /// Submit the create-from-cart form.
    CreateFromCart(CreateFromCartRequest),

    /// Download the selection as an archive and save it under `save_as`.
    DownloadCart {
        request: DownloadCartRequest,
        csrf_token: String,
        save_as: String,
    },
}

impl WorkerMessage {
    /// Short name used in log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search",
            Self::CreateFromCart(_) => "create_from_cart",
            Self::DownloadCart { .. } => "download_cart",
        }
    }
}

/// Responses sent from the worker back to the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A search returned its result list.
    SearchCompleted {
        generation: u64,
        datasets: Vec<DatasetSummary>,
    },

    /// A search failed.
    SearchFailed { generation: u64, failure: Failure },

    /// The create-from-cart endpoint answered with its JSON verdict.
    CreateCompleted(CreateOutcome),

    /// The create-from-cart request failed before a verdict was received.
    CreateFailed(Failure),

    /// The archive was downloaded and saved.
    ArchiveSaved(SavedArchive),

    /// The download failed.
    DownloadFailed(Failure),
}

//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the only place where [`AppState`] is mutated.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the input loop, timers, or the worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` fields and methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Filters**: `PageLoaded`, `QueryInput`, `PublicationTypeSelected`,
//!   `SortingSelected`, `ClearFilters`, `TagClicked`, `PublicationTypeBadgeClicked`
//! - **Selection**: `AddToSelection`, `RemoveFromSelection`, `PulseExpired`
//! - **Workflows**: `OpenModal`, `CloseModal`, `SubmitCreate`, `SubmitDownload`, `DismissAlert`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new(String::new());
//! let (render, actions) = handle_event(&mut state, &Event::QueryInput("phones".into()))?;
//! assert!(render);
//! assert!(matches!(actions[..], [Action::PostToWorker(_)]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::actions::PULSE_DURATION;
use super::modes::Modal;
use super::selection::{AddOutcome, RemoveOutcome};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{DatasetId, PublicationTypeFilter, Sorting};
use crate::worker::{
    CreateFromCartRequest, CreateOutcome, DownloadCartRequest, Failure, WorkerMessage,
    WorkerResponse,
};
use std::path::PathBuf;

/// Archive name used when the download dialog is submitted blank.
pub const DEFAULT_ARCHIVE_NAME: &str = "models";

const CREATE_ERROR_PREFIX: &str = "Error creating dataset: ";
const DOWNLOAD_ERROR_PREFIX: &str = "Error downloading: ";
const NETWORK_ERROR_PREFIX: &str = "Network error: ";

/// Values of the create-from-cart dialog at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateDatasetForm {
    pub title: String,
    pub description: String,
    /// Wire value of the chosen publication type.
    pub publication_type: String,
    /// Delimited tag text, as typed.
    pub tags: String,
    pub attachments: Vec<PathBuf>,
}

/// Events triggered by user input, timers, or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The page finished loading. `query` comes from the page query string.
    PageLoaded {
        /// Pre-populated search text, if the query string carried one.
        query: Option<String>,
    },

    /// The search text field changed.
    QueryInput(String),
    /// The publication type filter changed.
    PublicationTypeSelected(PublicationTypeFilter),
    /// The sort order changed.
    SortingSelected(Sorting),
    /// The clear-filters control was clicked.
    ClearFilters,
    /// A tag badge on a result card was clicked.
    TagClicked(String),
    /// The publication type badge on a result card was clicked.
    PublicationTypeBadgeClicked(String),

    /// A card's add control was clicked.
    AddToSelection {
        id: DatasetId,
        title: String,
    },
    /// A selection row's remove control was clicked.
    RemoveFromSelection {
        id: DatasetId,
    },
    /// The duplicate-add pulse timer of a row fired.
    PulseExpired {
        id: DatasetId,
    },

    /// A workflow trigger button was clicked.
    OpenModal(Modal),
    /// A dialog close control was clicked.
    CloseModal(Modal),
    /// The create-from-cart dialog was submitted.
    SubmitCreate(CreateDatasetForm),
    /// The download dialog was submitted with the typed file name.
    SubmitDownload {
        filename: String,
    },
    /// The blocking alert was acknowledged.
    DismissAlert,

    /// Wraps a response from the background worker.
    ///
    /// Processed by matching on the inner [`WorkerResponse`] variant.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The returned flag tells the runtime whether the page must be re-rendered;
/// the actions are executed in order.
///
/// # Errors
///
/// Returns [`ExplorerError::InvalidInput`](crate::domain::ExplorerError::InvalidInput)
/// when a submitted form is unusable.
///
/// # Example
///
/// ```rust
/// use dataset_explorer::app::{handle_event, AppState, Event};
/// use dataset_explorer::domain::DatasetId;
///
/// let mut state = AppState::new(String::new());
/// let add = Event::AddToSelection { id: DatasetId(7), title: "Phones".into() };
/// handle_event(&mut state, &add)?;
/// handle_event(&mut state, &add)?;
/// assert_eq!(state.selection.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PageLoaded { query } => {
            if let Some(query) = query {
                state.criteria.query.clone_from(query);
            }
            Ok((true, vec![search_action(state)]))
        }
        Event::QueryInput(query) => {
            state.criteria.query.clone_from(query);
            Ok((true, vec![search_action(state)]))
        }
        Event::PublicationTypeSelected(filter) => {
            state.criteria.publication_type = *filter;
            Ok((true, vec![search_action(state)]))
        }
        Event::SortingSelected(sorting) => {
            state.criteria.sorting = *sorting;
            Ok((true, vec![search_action(state)]))
        }
        Event::ClearFilters => {
            tracing::debug!("filters reset to defaults");
            state.criteria.reset();
            Ok((true, vec![search_action(state)]))
        }
        Event::TagClicked(label) | Event::PublicationTypeBadgeClicked(label) => {
            label.trim().clone_into(&mut state.criteria.query);
            Ok((true, vec![search_action(state)]))
        }

        Event::AddToSelection { id, title } => match state.selection.add(*id, title.as_str()) {
            AddOutcome::Added => {
                tracing::debug!(dataset_id = %id, selected = state.selection.len(), "dataset selected");
                Ok((true, vec![]))
            }
            AddOutcome::AlreadySelected => {
                tracing::debug!(dataset_id = %id, "duplicate add acknowledged");
                state.pulsing.insert(*id);
                Ok((
                    true,
                    vec![Action::ClearPulseAfter {
                        id: *id,
                        delay: PULSE_DURATION,
                    }],
                ))
            }
        },
        Event::RemoveFromSelection { id } => match state.selection.remove(*id) {
            RemoveOutcome::Removed => {
                state.pulsing.remove(id);
                tracing::debug!(dataset_id = %id, selected = state.selection.len(), "dataset deselected");
                if state.selection.is_empty() {
                    if let Some(modal) = state.open_modal.take() {
                        tracing::debug!(modal = modal.element_id(), "selection emptied, closing dialog");
                    }
                }
                Ok((true, vec![]))
            }
            RemoveOutcome::NotSelected => Ok((false, vec![])),
        },
        Event::PulseExpired { id } => Ok((state.pulsing.remove(id), vec![])),

        Event::OpenModal(modal) => {
            if state.selection.is_empty() {
                tracing::debug!(modal = modal.element_id(), "ignoring open with empty selection");
                return Ok((false, vec![]));
            }
            state.open_modal = Some(*modal);
            Ok((true, vec![]))
        }
        Event::CloseModal(modal) => {
            if state.open_modal != Some(*modal) {
                return Ok((false, vec![]));
            }
            state.open_modal = None;
            Ok((true, vec![]))
        }
        Event::SubmitCreate(form) => submit_create(state, form),
        Event::SubmitDownload { filename } => Ok(submit_download(state, filename)),
        Event::DismissAlert => Ok((state.alert.take().is_some(), vec![])),

        Event::WorkerResponse(response) => Ok(handle_worker_response(state, response)),
    }
}

/// Issues a search from the current criteria.
fn search_action(state: &mut AppState) -> Action {
    let (generation, request) = state.begin_search();
    Action::PostToWorker(WorkerMessage::Search { generation, request })
}

fn submit_create(state: &mut AppState, form: &CreateDatasetForm) -> Result<(bool, Vec<Action>)> {
    if state.open_modal != Some(Modal::CreateDataset) || state.selection.is_empty() {
        tracing::debug!("create submitted without an open dialog");
        return Ok((false, vec![]));
    }
    if form.title.trim().is_empty() {
        return Err(crate::domain::ExplorerError::InvalidInput(
            "dataset title must not be empty".to_string(),
        ));
    }

    let request = CreateFromCartRequest {
        title: form.title.clone(),
        description: form.description.clone(),
        publication_type: form.publication_type.clone(),
        tags: form.tags.clone(),
        selected_datasets: state.selection.hidden_field_value(),
        csrf_token: state.csrf_token.clone(),
        attachments: form.attachments.clone(),
    };

    tracing::debug!(
        selected = state.selection.len(),
        attachments = request.attachments.len(),
        "create-from-cart submitted"
    );

    Ok((false, vec![Action::PostToWorker(WorkerMessage::CreateFromCart(request))]))
}

fn submit_download(state: &mut AppState, filename: &str) -> (bool, Vec<Action>) {
    if state.open_modal != Some(Modal::DownloadCart) || state.selection.is_empty() {
        tracing::debug!("download submitted without an open dialog");
        return (false, vec![]);
    }

    state.open_modal = None;

    let filename = normalized_filename(filename);
    let save_as = archive_file_name(&filename);
    tracing::debug!(selected = state.selection.len(), save_as = %save_as, "download-cart submitted");

    let message = WorkerMessage::DownloadCart {
        request: DownloadCartRequest {
            dataset_ids: state.selection.snapshot(),
            filename,
        },
        csrf_token: state.csrf_token.clone(),
        save_as,
    };

    (true, vec![Action::PostToWorker(message)])
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::SearchCompleted { generation, datasets } => {
            if !state.is_current_search(*generation) {
                tracing::warn!(
                    generation = generation,
                    latest = state.search_generation(),
                    "discarding stale search response"
                );
                return (false, vec![]);
            }
            state.apply_search_results(datasets.clone());
            (true, vec![])
        }
        WorkerResponse::SearchFailed { generation, failure } => {
            if !state.is_current_search(*generation) {
                tracing::warn!(generation = generation, "discarding stale search failure");
                return (false, vec![]);
            }
            tracing::warn!(error = %failure, "search failed");
            state.apply_search_failure(search_error_message(failure));
            (true, vec![])
        }
        WorkerResponse::CreateCompleted(outcome) => create_completed(state, outcome),
        WorkerResponse::CreateFailed(failure) => {
            tracing::warn!(error = %failure, "create-from-cart failed");
            state.alert = Some(match failure {
                Failure::Transport(detail) => format!("{NETWORK_ERROR_PREFIX}{detail}"),
                Failure::Rejected(message) => create_error_message(Some(message)),
            });
            (true, vec![])
        }
        WorkerResponse::ArchiveSaved(saved) => {
            tracing::info!(path = %saved.path.display(), bytes = saved.bytes, "archive saved");
            state.last_saved_archive = Some(saved.clone());
            (true, vec![])
        }
        WorkerResponse::DownloadFailed(failure) => {
            tracing::warn!(error = %failure, "download-cart failed");
            state.alert = Some(match failure {
                Failure::Transport(detail) => format!("{NETWORK_ERROR_PREFIX}{detail}"),
                Failure::Rejected(text) => format!("{DOWNLOAD_ERROR_PREFIX}{text}"),
            });
            (true, vec![])
        }
    }
}

fn create_completed(state: &mut AppState, outcome: &CreateOutcome) -> (bool, Vec<Action>) {
    if !outcome.success {
        tracing::warn!(message = ?outcome.message, "create-from-cart rejected");
        state.alert = Some(create_error_message(outcome.message.as_deref()));
        return (true, vec![]);
    }

    let cleared = state.selection.clear();
    state.pulsing.clear();
    if state.open_modal == Some(Modal::CreateDataset) {
        state.open_modal = None;
    }
    tracing::info!(
        dataset_id = ?outcome.dataset_id,
        cleared = cleared,
        "dataset created from selection"
    );

    (true, vec![search_action(state)])
}

fn create_error_message(message: Option<&str>) -> String {
    let message = message.map(str::trim).filter(|m| !m.is_empty()).unwrap_or("unknown error");
    if message.starts_with(CREATE_ERROR_PREFIX.trim_end()) {
        message.to_string()
    } else {
        format!("{CREATE_ERROR_PREFIX}{message}")
    }
}

fn search_error_message(failure: &Failure) -> String {
    match failure {
        Failure::Transport(detail) => format!("{NETWORK_ERROR_PREFIX}{detail}"),
        Failure::Rejected(text) => format!("Search error: {text}"),
    }
}

/// Trims the typed archive name, substituting [`DEFAULT_ARCHIVE_NAME`] when blank.
#[must_use]
pub fn normalized_filename(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        DEFAULT_ARCHIVE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Name the archive is saved under: `filename` with `.zip` appended if missing.
///
/// ```
/// use dataset_explorer::app::handler::archive_file_name;
///
/// assert_eq!(archive_file_name("models"), "models.zip");
/// assert_eq!(archive_file_name("cart.zip"), "cart.zip");
/// ```
#[must_use]
pub fn archive_file_name(filename: &str) -> String {
    if filename.ends_with(".zip") {
        filename.to_string()
    } else {
        format!("{filename}.zip")
    }
}

//! Worker implementation for asynchronous request execution.
//!
//! The worker runs every [`Action`] off the event loop: requests are spawned on
//! the tokio runtime and their outcome is posted back as an [`Event`] over an
//! unbounded channel, so the handler itself never awaits anything.

use crate::app::{Action, Event};
use crate::domain::error::{ExplorerError, Result};
use crate::worker::client::ExploreClient;
use crate::worker::messages::{Failure, SavedArchive, WorkerMessage, WorkerResponse};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc::UnboundedSender;
use tracing::Instrument;

const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Executes actions and reports completions back to the event loop.
#[derive(Debug, Clone)]
pub struct ExplorerWorker {
    client: Arc<ExploreClient>,
    download_dir: PathBuf,
    events: UnboundedSender<Event>,
}

impl ExplorerWorker {
    /// Creates a worker that saves archives under `download_dir` and posts
    /// completions to `events`.
    #[must_use]
    pub fn new(client: ExploreClient, download_dir: PathBuf, events: UnboundedSender<Event>) -> Self {
        Self {
            client: Arc::new(client),
            download_dir,
            events,
        }
    }

    /// Starts an action in the background. Must be called inside a tokio runtime.
    pub fn execute(&self, action: Action) {
        match action {
            Action::PostToWorker(message) => {
                let worker = self.clone();
                tokio::spawn(async move {
                    let response = worker.process(message).await;
                    if let Err(e) = worker.post(Event::WorkerResponse(response)) {
                        tracing::warn!(error = %e, "dropping worker completion");
                    }
                });
            }
            Action::ClearPulseAfter { id, delay } => {
                let worker = self.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if let Err(e) = worker.post(Event::PulseExpired { id }) {
                        tracing::debug!(error = %e, "dropping pulse expiry");
                    }
                });
            }
        }
    }

    fn post(&self, event: Event) -> Result<()> {
        self.events
            .send(event)
            .map_err(|_| ExplorerError::Worker("event loop closed".to_string()))
    }

    /// Performs one request and converts its outcome into a response.
    pub async fn process(&self, message: WorkerMessage) -> WorkerResponse {
        let span = tracing::debug_span!("worker_process", message_type = message.kind());

        self.dispatch(message).instrument(span).await
    }

    async fn dispatch(&self, message: WorkerMessage) -> WorkerResponse {
        match message {
            WorkerMessage::Search { generation, request } => match self.client.search(&request).await {
                Ok(datasets) => WorkerResponse::SearchCompleted { generation, datasets },
                Err(e) => {
                    tracing::warn!(generation = generation, error = %e, "search request failed");
                    WorkerResponse::SearchFailed {
                        generation,
                        failure: Failure::from(e),
                    }
                }
            },
            WorkerMessage::CreateFromCart(request) => match self.client.create_from_cart(&request).await {
                Ok(outcome) => WorkerResponse::CreateCompleted(outcome),
                Err(e) => {
                    tracing::warn!(error = %e, "create-from-cart request failed");
                    WorkerResponse::CreateFailed(Failure::from(e))
                }
            },
            WorkerMessage::DownloadCart { request, csrf_token, save_as } => {
                let result = match self.client.download_cart(&request, &csrf_token).await {
                    Ok(bytes) => self.save_archive(&save_as, &bytes).await,
                    Err(e) => Err(e),
                };
                match result {
                    Ok(saved) => WorkerResponse::ArchiveSaved(saved),
                    Err(e) => {
                        tracing::warn!(error = %e, "download-cart request failed");
                        WorkerResponse::DownloadFailed(Failure::from(e))
                    }
                }
            }
        }
    }

    /// Writes an archive into the download directory.
    ///
    /// Only the final component of `save_as` is used, so a typed name can never
    /// escape the download directory. An existing file is never replaced: the
    /// archive goes to the first free `name (n).ext` instead.
    async fn save_archive(&self, save_as: &str, bytes: &[u8]) -> Result<SavedArchive> {
        let file_name = Path::new(save_as)
            .file_name()
            .ok_or_else(|| ExplorerError::InvalidInput(format!("unusable archive name {save_as:?}")))?;

        tokio::fs::create_dir_all(&self.download_dir).await?;
        let (path, mut file) = self.create_unused(Path::new(file_name)).await?;
        file.write_all(bytes).await?;
        file.flush().await?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "archive written");
        Ok(SavedArchive {
            path,
            bytes: bytes.len() as u64,
        })
    }

    async fn create_unused(&self, file_name: &Path) -> Result<(PathBuf, tokio::fs::File)> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.download_dir.join(numbered_name(file_name, attempt));
            match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    tracing::debug!(path = %path.display(), "archive name taken");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Err(ExplorerError::InvalidInput(format!(
            "no free name for {} in {}",
            file_name.display(),
            self.download_dir.display()
        )))
    }
}

/// `cart.zip` for attempt 0, then `cart (1).zip`, `cart (2).zip`, ...
fn numbered_name(file_name: &Path, attempt: u32) -> PathBuf {
    if attempt == 0 {
        return file_name.to_path_buf();
    }
    let stem = file_name.file_stem().unwrap_or(file_name.as_os_str()).to_string_lossy();
    match file_name.extension() {
        Some(ext) => PathBuf::from(format!("{stem} ({attempt}).{}", ext.to_string_lossy())),
        None => PathBuf::from(format!("{stem} ({attempt})")),
    }
}

//! HTTP client for the three explore endpoints.
//!
//! Every call is fire-once: no retries, no cancellation. Non-success statuses
//! are reported as [`ExplorerError::Status`] carrying the response text, except
//! for create-from-cart whose JSON verdict is read regardless of status.

use crate::domain::error::{ExplorerError, Result};
use crate::domain::DatasetSummary;
use crate::worker::messages::{CreateFromCartRequest, CreateOutcome, DownloadCartRequest, SearchRequest};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use std::path::Path;
use std::time::Duration;
use url::Url;

const SEARCH_PATH: &str = "explore";
const CREATE_FROM_CART_PATH: &str = "explore/create-dataset-from-cart";
const DOWNLOAD_CART_PATH: &str = "explore/download_cart";

/// Header carrying the CSRF token on the download request.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Client bound to one server.
#[derive(Debug, Clone)]
pub struct ExploreClient {
    http: Client,
    base_url: Url,
}

impl ExploreClient {
    /// Creates a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::Config`] for an unparseable base URL and
    /// [`ExplorerError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ExplorerError::Config(format!("invalid base_url {base_url:?}: {e}")))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ExplorerError::Config(format!("cannot resolve {path}: {e}")))
    }

    /// `POST /explore`.
    ///
    /// # Errors
    ///
    /// Transport failures, non-success statuses and bodies that are not a JSON
    /// array of datasets.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<DatasetSummary>> {
        let url = self.endpoint(SEARCH_PATH)?;
        tracing::debug!(url = %url, query = %request.query, "sending search request");

        let response = self.http.post(url).json(request).send().await?;
        let body = success_text(response).await?;
        let datasets: Vec<DatasetSummary> = serde_json::from_str(&body)?;

        tracing::debug!(result_count = datasets.len(), "search response decoded");
        Ok(datasets)
    }

    /// `POST /explore/create-dataset-from-cart` as a multipart form.
    ///
    /// Attachments are read fully and sent as opaque `files` parts.
    ///
    /// # Errors
    ///
    /// Unreadable attachments, transport failures, and replies that are not the
    /// JSON verdict (reported as [`ExplorerError::Status`] when the status was
    /// also a failure).
    pub async fn create_from_cart(&self, request: &CreateFromCartRequest) -> Result<CreateOutcome> {
        let url = self.endpoint(CREATE_FROM_CART_PATH)?;

        let mut form = Form::new()
            .text("title", request.title.clone())
            .text("description", request.description.clone())
            .text("publication_type", request.publication_type.clone())
            .text("tags", request.tags.clone())
            .text("selected_datasets", request.selected_datasets.clone())
            .text("csrf_token", request.csrf_token.clone());
        for path in &request.attachments {
            form = form.part("files", attachment_part(path).await?);
        }

        tracing::debug!(
            url = %url,
            selected_datasets = %request.selected_datasets,
            attachments = request.attachments.len(),
            "sending create-from-cart request"
        );

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<CreateOutcome>(&body) {
            Ok(outcome) => Ok(outcome),
            Err(_) if !status.is_success() => Err(ExplorerError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(ExplorerError::Decode(e)),
        }
    }

    /// `POST /explore/download_cart`; returns the archive bytes, fully buffered.
    ///
    /// # Errors
    ///
    /// Transport failures and non-success statuses (whose body is the error text).
    pub async fn download_cart(&self, request: &DownloadCartRequest, csrf_token: &str) -> Result<Vec<u8>> {
        let url = self.endpoint(DOWNLOAD_CART_PATH)?;
        tracing::debug!(url = %url, dataset_count = request.dataset_ids.len(), "sending download-cart request");

        let response = self
            .http
            .post(url)
            .header(CSRF_HEADER, csrf_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ExplorerError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

async fn success_text(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(ExplorerError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

async fn attachment_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map_or_else(|| "attachment".to_string(), |name| name.to_string_lossy().into_owned());

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/octet-stream")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gains_trailing_slash() {
        let client = ExploreClient::new("http://localhost:5000/app", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/app/");
        assert_eq!(
            client.endpoint(DOWNLOAD_CART_PATH).unwrap().as_str(),
            "http://localhost:5000/app/explore/download_cart"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let error = ExploreClient::new("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(error, ExplorerError::Config(_)));
    }
}

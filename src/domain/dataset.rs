//! Dataset records returned by the search endpoint.
//!
//! A [`DatasetSummary`] lives for one search response and is read-only from
//! the client's perspective. The field names follow the server's JSON keys;
//! unknown keys are ignored so the server may add fields freely.

use crate::domain::error::{ExplorerError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display format for creation timestamps, e.g. `January 5, 2024, 3:07 PM`.
const CREATED_AT_FORMAT: &str = "%B %-d, %Y, %-I:%M %p";

/// Server-side dataset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(pub u64);

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DatasetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for DatasetId {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ExplorerError::InvalidInput(format!("'{}' is not a dataset id", s.trim())))
    }
}

/// One author line of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub orcid: Option<String>,
}

impl Author {
    /// Formats the author as `Name (Affiliation) (ORCID)`, omitting absent parts.
    ///
    /// ```
    /// use dataset_explorer::domain::Author;
    ///
    /// let author = Author {
    ///     name: "Doe, Jane".to_string(),
    ///     affiliation: Some("Lab".to_string()),
    ///     orcid: None,
    /// };
    /// assert_eq!(author.display_line(), "Doe, Jane (Lab)");
    /// ```
    #[must_use]
    pub fn display_line(&self) -> String {
        let mut line = self.name.clone();
        for part in [&self.affiliation, &self.orcid].into_iter().flatten() {
            if !part.trim().is_empty() {
                line.push_str(&format!(" ({})", part.trim()));
            }
        }
        line
    }
}

/// A dataset as listed by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub id: DatasetId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Creation time as sent by the server (HTTP-date or RFC 3339).
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub created_at_timestamp: Option<i64>,
    /// Publication-type display label, e.g. `Journal Article`.
    #[serde(default)]
    pub publication_type: String,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// DOI URL when the dataset has a DOI, otherwise the view route.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub dataset_doi: Option<String>,
    #[serde(default)]
    pub publication_doi: Option<String>,
    #[serde(default, rename = "download")]
    pub download_url: Option<String>,
    #[serde(default, rename = "total_size_in_human_format")]
    pub total_size_human: Option<String>,
    #[serde(default)]
    pub download_count: Option<u64>,
    #[serde(default)]
    pub dataset_type: Option<String>,
    #[serde(default)]
    pub files_count: Option<u64>,
}

impl DatasetSummary {
    /// Returns the external DOI URL, if the dataset has a DOI.
    #[must_use]
    pub fn doi_url(&self) -> Option<&str> {
        let has_doi = self.dataset_doi.as_deref().is_some_and(|doi| !doi.trim().is_empty());
        (has_doi && !self.url.is_empty()).then_some(self.url.as_str())
    }

    /// Canonical view-by-id route.
    #[must_use]
    pub fn view_route(&self) -> String {
        format!("/dataset/view/{}", self.id)
    }

    /// Target of the title link: the DOI URL if present, else the view route.
    #[must_use]
    pub fn title_href(&self) -> String {
        self.doi_url().map_or_else(|| self.view_route(), str::to_string)
    }

    /// Target of the "View dataset" link.
    #[must_use]
    pub fn view_href(&self) -> String {
        if self.url.is_empty() {
            self.view_route()
        } else {
            self.url.clone()
        }
    }

    /// Target of the per-dataset download link.
    #[must_use]
    pub fn download_href(&self) -> String {
        match self.download_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => format!("/dataset/download/{}", self.id),
        }
    }

    /// Label of the download link, annotated with the human-readable size when known.
    #[must_use]
    pub fn download_label(&self) -> String {
        match self.total_size_human.as_deref().map(str::trim) {
            Some(size) if !size.is_empty() => format!("Download ({size})"),
            _ => "Download".to_string(),
        }
    }

    /// Tags with surrounding whitespace removed; empty tags are skipped.
    pub fn clean_tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.trim()).filter(|t| !t.is_empty())
    }

    /// Parses the creation time.
    ///
    /// Tries HTTP-date, RFC 3339 and naive ISO-8601 (assumed UTC), then the
    /// numeric `created_at_timestamp`.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.trim();
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|naive| naive.and_utc())
            })
            .or_else(|| self.created_at_timestamp.and_then(|ts| DateTime::from_timestamp(ts, 0)))
    }

    /// Creation time with date and time, e.g. `January 5, 2024, 3:07 PM`.
    ///
    /// Falls back to the raw server text if it cannot be parsed.
    #[must_use]
    pub fn formatted_created_at(&self) -> String {
        self.created_at_utc()
            .map_or_else(|| self.created_at.clone(), |dt| dt.format(CREATED_AT_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_json() -> &'static str {
        r#"{
            "title": "Feature models of mobile apps",
            "id": 7,
            "created_at": "Fri, 05 Jan 2024 15:07:00 GMT",
            "created_at_timestamp": 1704467220,
            "description": "A curated set",
            "authors": [
                {"name": "Doe, Jane", "affiliation": "Uni", "orcid": "0000-0001"},
                {"name": "Roe, Rick", "affiliation": null, "orcid": null}
            ],
            "publication_type": "Journal Article",
            "publication_doi": null,
            "dataset_doi": "10.1234/abc",
            "tags": ["mobile", " apps ", ""],
            "url": "http://localhost/doi/10.1234/abc",
            "download": "http://localhost/dataset/download/7",
            "zenodo": null,
            "download_count": 3,
            "dataset_type": "uvl_dataset",
            "files_count": 2,
            "total_size_in_bytes": 2048,
            "total_size_in_human_format": "2.0 KB"
        }"#
    }

    #[test]
    fn test_deserialize_server_record() {
        let dataset: DatasetSummary = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(dataset.id, DatasetId(7));
        assert_eq!(dataset.authors.len(), 2);
        assert_eq!(dataset.total_size_human.as_deref(), Some("2.0 KB"));
        assert_eq!(dataset.download_count, Some(3));
    }

    #[test]
    fn test_links_with_doi() {
        let dataset: DatasetSummary = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(dataset.title_href(), "http://localhost/doi/10.1234/abc");
        assert_eq!(dataset.download_href(), "http://localhost/dataset/download/7");
        assert_eq!(dataset.download_label(), "Download (2.0 KB)");
    }

    #[test]
    fn test_links_without_doi() {
        let dataset: DatasetSummary = serde_json::from_str(
            r#"{"id": 9, "title": "Raw", "url": "/dataset/view/9", "created_at": ""}"#,
        )
        .unwrap();
        assert_eq!(dataset.title_href(), "/dataset/view/9");
        assert_eq!(dataset.view_href(), "/dataset/view/9");
        assert_eq!(dataset.download_href(), "/dataset/download/9");
        assert_eq!(dataset.download_label(), "Download");
    }

    #[test]
    fn test_author_lines() {
        let dataset: DatasetSummary = serde_json::from_str(sample_json()).unwrap();
        let lines: Vec<String> = dataset.authors.iter().map(Author::display_line).collect();
        assert_eq!(lines, vec!["Doe, Jane (Uni) (0000-0001)", "Roe, Rick"]);
    }

    #[test]
    fn test_clean_tags() {
        let dataset: DatasetSummary = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(dataset.clean_tags().collect::<Vec<_>>(), vec!["mobile", "apps"]);
    }

    #[test]
    fn test_formatted_created_at_http_date() {
        let dataset: DatasetSummary = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(dataset.formatted_created_at(), "January 5, 2024, 3:07 PM");
    }

    #[test]
    fn test_formatted_created_at_rfc3339_and_fallbacks() {
        let mut dataset: DatasetSummary = serde_json::from_str(sample_json()).unwrap();
        dataset.created_at = "2023-11-20T09:30:00Z".to_string();
        assert_eq!(dataset.formatted_created_at(), "November 20, 2023, 9:30 AM");

        dataset.created_at = "not a date".to_string();
        assert_eq!(dataset.formatted_created_at(), "January 5, 2024, 3:07 PM");

        dataset.created_at_timestamp = None;
        assert_eq!(dataset.formatted_created_at(), "not a date");
    }

    #[test]
    fn test_dataset_id_parse() {
        assert_eq!(" 42 ".parse::<DatasetId>().unwrap(), DatasetId(42));
        assert!("abc".parse::<DatasetId>().is_err());
        assert_eq!(DatasetId(42).to_string(), "42");
    }
}

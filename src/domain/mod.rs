//! Domain layer for the dataset explorer.
//!
//! Core types shared by every other layer, independent of HTTP or rendering
//! concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`dataset`]: Dataset records as delivered by the search endpoint
//! - [`criteria`]: Filter values that make up a search

pub mod criteria;
pub mod dataset;
pub mod error;

pub use criteria::{PublicationType, PublicationTypeFilter, SearchCriteria, Sorting};
pub use dataset::{Author, DatasetId, DatasetSummary};
pub use error::{ExplorerError, Result};

//! Selection store ("cart") of datasets chosen for bulk workflows.
//!
//! The store is the single writable shared state of the page: every other
//! surface (card buttons, list panel, count badges, hidden form field, workflow
//! buttons) is a derived view recomputed from it. It is owned by
//! [`AppState`](crate::app::AppState) and mutated only through [`SelectionStore::add`],
//! [`SelectionStore::remove`] and [`SelectionStore::clear`].
//!
//! Invariants:
//! - at most one entry per id
//! - insertion order is preserved (display only)
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::selection::{AddOutcome, SelectionStore};
//! use dataset_explorer::domain::DatasetId;
//!
//! let mut store = SelectionStore::new();
//! assert_eq!(store.add(DatasetId(3), "Phones"), AddOutcome::Added);
//! assert_eq!(store.add(DatasetId(3), "Phones"), AddOutcome::AlreadySelected);
//! assert_eq!(store.hidden_field_value(), "3");
//! ```

use crate::domain::DatasetId;
use indexmap::IndexMap;

/// One selected dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    pub id: DatasetId,
    pub title: String,
}

/// Result of [`SelectionStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The entry was inserted.
    Added,
    /// The id was already selected; the store is unchanged.
    AlreadySelected,
}

/// Result of [`SelectionStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry was deleted.
    Removed,
    /// The id was not selected; the store is unchanged.
    NotSelected,
}

/// Ordered mapping of dataset id to selection entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    entries: IndexMap<DatasetId, SelectionEntry>,
}

impl SelectionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a dataset. A second add of the same id is a no-op.
    pub fn add(&mut self, id: DatasetId, title: impl Into<String>) -> AddOutcome {
        if self.entries.contains_key(&id) {
            tracing::debug!(dataset_id = %id, "dataset already selected");
            return AddOutcome::AlreadySelected;
        }

        let title = title.into();
        tracing::debug!(dataset_id = %id, title = %title, "dataset selected");
        self.entries.insert(id, SelectionEntry { id, title });
        AddOutcome::Added
    }

    /// Deselects a dataset. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: DatasetId) -> RemoveOutcome {
        // shift_remove keeps the remaining rows in insertion order
        if self.entries.shift_remove(&id).is_some() {
            tracing::debug!(dataset_id = %id, "dataset deselected");
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotSelected
        }
    }

    /// Empties the store, returning how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        tracing::debug!(cleared = count, "selection cleared");
        count
    }

    #[must_use]
    pub fn contains(&self, id: DatasetId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selected entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &SelectionEntry> {
        self.entries.values()
    }

    /// Current key set in insertion order.
    ///
    /// Feeds both submission protocols: the comma-joined hidden form field and
    /// the typed id list of the bulk-download payload.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DatasetId> {
        self.entries.keys().copied().collect()
    }

    /// Value of the hidden `selected_datasets` field: ids joined with commas.
    #[must_use]
    pub fn hidden_field_value(&self) -> String {
        self.entries
            .keys()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container of the explore
//! page, along with the single deterministic "recompute all derived views" pass
//! ([`AppState::compute_viewmodel`]). It is the single source of truth for every
//! transient UI value; nothing else in the crate keeps its own copy.
//!
//! # State Components
//!
//! - **Criteria**: Current values of the filter widgets
//! - **Results**: Datasets from the latest applied search response
//! - **Search status / generation**: Lifecycle of the latest search and the
//!   counter used to discard out-of-order responses
//! - **Selection**: The [`SelectionStore`] (cart) plus transient pulse marks
//! - **Modal / alert**: Which dialog is open and the pending blocking alert
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::AppState;
//! use dataset_explorer::domain::DatasetId;
//!
//! let mut state = AppState::new("token".to_string());
//! state.selection.add(DatasetId(1), "Phones");
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.selection.hidden_ids, "1");
//! ```

use super::modes::{Modal, SearchStatus};
use super::selection::SelectionStore;
use crate::domain::{DatasetId, DatasetSummary, PublicationType, PublicationTypeFilter, SearchCriteria, Sorting};
use crate::ui::viewmodel::{
    AddButtonView, BadgeView, DatasetCard, FiltersView, ModalView, OptionView, PageViewModel,
    ResultsView, SavedArchiveView, SelectionRowView, SelectionView,
};
use crate::worker::{SavedArchive, SearchRequest};
use std::collections::BTreeSet;

/// Label of an enabled add control.
pub const ADD_LABEL: &str = "Add to my dataset";

/// Label of a disabled add control (dataset already selected).
pub const ADDED_LABEL: &str = "Added";

/// Placeholder row of an empty selection list.
pub const EMPTY_SELECTION_MESSAGE: &str = "No datasets selected yet.";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Filter widget values. Rebuilt into a request on every filter event.
    pub criteria: SearchCriteria,

    /// CSRF token echoed back on every request.
    pub csrf_token: String,

    /// Datasets of the latest applied search response, in server order.
    pub results: Vec<DatasetSummary>,

    /// Lifecycle of the latest search.
    pub search_status: SearchStatus,

    /// The selection store.
    pub selection: SelectionStore,

    /// Selection rows currently showing the duplicate-add pulse.
    pub pulsing: BTreeSet<DatasetId>,

    /// Dialog currently shown, if any.
    pub open_modal: Option<Modal>,

    /// Pending blocking alert.
    pub alert: Option<String>,

    /// Archive saved by the latest successful download.
    pub last_saved_archive: Option<SavedArchive>,

    /// Generation of the most recently issued search.
    search_generation: u64,
}

impl AppState {
    /// Creates the page state as it is right after page load: default filters,
    /// no results, empty selection, no dialog.
    #[must_use]
    pub fn new(csrf_token: String) -> Self {
        Self {
            criteria: SearchCriteria::default(),
            csrf_token,
            results: vec![],
            search_status: SearchStatus::Idle,
            selection: SelectionStore::new(),
            pulsing: BTreeSet::new(),
            open_modal: None,
            alert: None,
            last_saved_archive: None,
            search_generation: 0,
        }
    }

    /// Generation of the most recently issued search (0 before the first one).
    #[must_use]
    pub const fn search_generation(&self) -> u64 {
        self.search_generation
    }

    /// Starts a new search from the current criteria.
    ///
    /// Bumps the generation, hides the "not found" indicator (by leaving the
    /// settled states) and returns the generation together with the request body.
    pub fn begin_search(&mut self) -> (u64, SearchRequest) {
        self.search_generation += 1;
        self.search_status = SearchStatus::Searching;

        tracing::debug!(
            generation = self.search_generation,
            query = %self.criteria.query,
            publication_type = self.criteria.publication_type.as_wire(),
            sorting = %self.criteria.sorting,
            "search issued"
        );

        let request = SearchRequest {
            csrf_token: self.csrf_token.clone(),
            query: self.criteria.query.clone(),
            publication_type: self.criteria.publication_type,
            sorting: self.criteria.sorting,
        };
        (self.search_generation, request)
    }

    /// Whether a response for `generation` belongs to the latest search.
    #[must_use]
    pub const fn is_current_search(&self, generation: u64) -> bool {
        generation == self.search_generation
    }

    /// Replaces all results with a response.
    pub fn apply_search_results(&mut self, datasets: Vec<DatasetSummary>) {
        tracing::debug!(result_count = datasets.len(), "search results applied");
        self.results = datasets;
        self.search_status = SearchStatus::Loaded;
    }

    /// Replaces the results with an inline error state.
    pub fn apply_search_failure(&mut self, message: String) {
        tracing::debug!(error = %message, "search failure applied");
        self.results.clear();
        self.search_status = SearchStatus::Failed(message);
    }

    /// Finds a dataset of the current results by id.
    #[must_use]
    pub fn result_by_id(&self, id: DatasetId) -> Option<&DatasetSummary> {
        self.results.iter().find(|d| d.id == id)
    }

    /// Computes the page view model from the current state.
    ///
    /// This is the single re-render pass invoked after every mutation. It is
    /// pure: the same state always yields the same view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        PageViewModel {
            filters: self.compute_filters(),
            results: self.compute_results(),
            selection: self.compute_selection(),
            create_modal: ModalView {
                open: self.open_modal == Some(Modal::CreateDataset),
            },
            download_modal: ModalView {
                open: self.open_modal == Some(Modal::DownloadCart),
            },
            alert: self.alert.clone(),
            saved_archive: self.last_saved_archive.as_ref().map(|saved| SavedArchiveView {
                path: saved.path.display().to_string(),
                bytes: saved.bytes,
            }),
        }
    }

    fn compute_filters(&self) -> FiltersView {
        let any = OptionView {
            value: PublicationTypeFilter::Any.as_wire(),
            label: "Any",
            selected: self.criteria.publication_type == PublicationTypeFilter::Any,
        };
        let publication_types = std::iter::once(any)
            .chain(PublicationType::ALL.into_iter().map(|pt| OptionView {
                value: pt.value(),
                label: pt.label(),
                selected: self.criteria.publication_type == PublicationTypeFilter::Only(pt),
            }))
            .collect();

        let sortings = Sorting::ALL
            .into_iter()
            .map(|sorting| OptionView {
                value: sorting.as_wire(),
                label: sorting.label(),
                selected: self.criteria.sorting == sorting,
            })
            .collect();

        FiltersView {
            query: self.criteria.query.clone(),
            publication_types,
            sortings,
        }
    }

    fn compute_results(&self) -> ResultsView {
        let (counter, error) = match &self.search_status {
            SearchStatus::Idle => (None, None),
            SearchStatus::Searching => (Some("Searching...".to_string()), None),
            SearchStatus::Loaded => (Some(results_counter(self.results.len())), None),
            SearchStatus::Failed(message) => (Some("Search failed".to_string()), Some(message.clone())),
        };

        ResultsView {
            cards: self.results.iter().map(|d| self.compute_card(d)).collect(),
            counter,
            not_found_visible: self.search_status == SearchStatus::Loaded && self.results.is_empty(),
            error,
        }
    }

    fn compute_card(&self, dataset: &DatasetSummary) -> DatasetCard {
        let selected = self.selection.contains(dataset.id);

        DatasetCard {
            id: dataset.id,
            title: dataset.title.clone(),
            title_href: dataset.title_href(),
            publication_type: BadgeView {
                label: dataset.publication_type.trim().to_string(),
            },
            created_at: dataset.formatted_created_at(),
            description: dataset.description.clone(),
            authors: dataset.authors.iter().map(|a| a.display_line()).collect(),
            tags: dataset
                .clean_tags()
                .map(|tag| BadgeView { label: tag.to_string() })
                .collect(),
            view_href: dataset.view_href(),
            download_href: dataset.download_href(),
            download_label: dataset.download_label(),
            add_button: AddButtonView {
                disabled: selected,
                label: if selected { ADDED_LABEL } else { ADD_LABEL },
            },
        }
    }

    fn compute_selection(&self) -> SelectionView {
        let count = self.selection.len();
        let has_selection = !self.selection.is_empty();

        SelectionView {
            rows: self
                .selection
                .entries()
                .map(|entry| SelectionRowView {
                    id: entry.id,
                    title: entry.title.clone(),
                    pulsing: self.pulsing.contains(&entry.id),
                })
                .collect(),
            empty_message: (!has_selection).then_some(EMPTY_SELECTION_MESSAGE),
            count_badge: count,
            sidebar_badge: count,
            hidden_ids: self.selection.hidden_field_value(),
            create_enabled: has_selection,
            download_enabled: has_selection,
        }
    }
}

/// Results caption: singular noun for exactly one result, plural otherwise.
///
/// ```
/// use dataset_explorer::app::state::results_counter;
///
/// assert_eq!(results_counter(0), "0 datasets found");
/// assert_eq!(results_counter(1), "1 dataset found");
/// assert_eq!(results_counter(2), "2 datasets found");
/// ```
#[must_use]
pub fn results_counter(count: usize) -> String {
    let noun = if count == 1 { "dataset" } else { "datasets" };
    format!("{count} {noun} found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dataset(id: u64, title: &str) -> DatasetSummary {
        DatasetSummary {
            id: DatasetId(id),
            title: title.to_string(),
            description: format!("About {title}"),
            created_at: "Fri, 05 Jan 2024 15:07:00 GMT".to_string(),
            created_at_timestamp: None,
            publication_type: "Journal Article".to_string(),
            authors: vec![],
            tags: vec!["genomics".to_string()],
            url: format!("/dataset/view/{id}"),
            dataset_doi: None,
            publication_doi: None,
            download_url: None,
            total_size_human: Some("1 KB".to_string()),
            download_count: None,
            dataset_type: None,
            files_count: None,
        }
    }

    #[test]
    fn test_initial_viewmodel() {
        let state = AppState::new(String::new());
        let vm = state.compute_viewmodel();

        assert_eq!(vm.results.counter, None);
        assert!(!vm.results.not_found_visible);
        assert_eq!(vm.selection.empty_message, Some(EMPTY_SELECTION_MESSAGE));
        assert_eq!(vm.selection.hidden_ids, "");
        assert!(!vm.selection.create_enabled);
        assert!(!vm.selection.download_enabled);
        assert!(!vm.create_modal.open);
        assert_eq!(vm.filters.publication_types.len(), 20);
        assert!(vm.filters.publication_types[0].selected);
        assert!(vm.filters.sortings[0].selected);
    }

    #[test]
    fn test_begin_search_bumps_generation_and_hides_not_found() {
        let mut state = AppState::new("tok".to_string());
        let (g1, _) = state.begin_search();
        state.apply_search_results(vec![]);
        assert!(state.compute_viewmodel().results.not_found_visible);

        let (g2, request) = state.begin_search();
        assert_eq!(g2, g1 + 1);
        assert_eq!(request.csrf_token, "tok");
        assert!(!state.is_current_search(g1));
        assert!(!state.compute_viewmodel().results.not_found_visible);
    }

    #[test]
    fn test_add_button_follows_membership() {
        let mut state = AppState::new(String::new());
        state.apply_search_results(vec![dataset(1, "A"), dataset(2, "B")]);
        state.selection.add(DatasetId(2), "B");

        let cards = state.compute_viewmodel().results.cards;
        assert_eq!(cards[0].add_button, AddButtonView { disabled: false, label: ADD_LABEL });
        assert_eq!(cards[1].add_button, AddButtonView { disabled: true, label: ADDED_LABEL });
    }

    #[test]
    fn test_selection_surfaces_agree() {
        let mut state = AppState::new(String::new());
        state.selection.add(DatasetId(4), "Four");
        state.selection.add(DatasetId(8), "Eight");
        state.pulsing.insert(DatasetId(8));

        let selection = state.compute_viewmodel().selection;
        assert_eq!(selection.count_badge, 2);
        assert_eq!(selection.sidebar_badge, 2);
        assert_eq!(selection.hidden_ids, "4,8");
        assert_eq!(selection.empty_message, None);
        assert!(selection.create_enabled && selection.download_enabled);
        assert!(!selection.rows[0].pulsing);
        assert!(selection.rows[1].pulsing);
    }

    #[test]
    fn test_failed_search_shows_error_and_clears_results() {
        let mut state = AppState::new(String::new());
        state.apply_search_results(vec![dataset(1, "A")]);
        state.begin_search();
        state.apply_search_failure("connection refused".to_string());

        let results = state.compute_viewmodel().results;
        assert!(results.cards.is_empty());
        assert!(!results.not_found_visible);
        assert_eq!(results.counter.as_deref(), Some("Search failed"));
        assert_eq!(results.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_card_fields() {
        let mut state = AppState::new(String::new());
        state.apply_search_results(vec![dataset(3, "Phones")]);
        let card = &state.compute_viewmodel().results.cards[0];

        assert_eq!(card.title_href, "/dataset/view/3");
        assert_eq!(card.publication_type.label, "Journal Article");
        assert_eq!(card.created_at, "January 5, 2024, 3:07 PM");
        assert_eq!(card.tags, vec![BadgeView { label: "genomics".to_string() }]);
        assert_eq!(card.download_label, "Download (1 KB)");
    }
}

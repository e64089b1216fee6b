//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `PageViewModel`
//! 2. **Component Rendering**: Delegate each surface to its component renderer
//!
//! The output is a [`RenderedPage`]: one HTML fragment per stable element id,
//! in page order. A host page swaps each fragment into the element with the
//! same id.
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::AppState;
//! use dataset_explorer::ui::{ids, render};
//!
//! let state = AppState::new(String::new());
//! let page = render(&state);
//! assert_eq!(page.get(ids::RESULTS), Some(r#"<div id="results"></div>"#));
//! ```

use crate::app::AppState;
use crate::ui::components::{alert, filters, modals, results, selection};
use crate::ui::ids;
use crate::ui::viewmodel::PageViewModel;
use indexmap::IndexMap;

/// HTML fragments of the page, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    fragments: IndexMap<&'static str, String>,
}

impl RenderedPage {
    fn insert(&mut self, id: &'static str, html: String) {
        self.fragments.insert(id, html);
    }

    /// Fragment of the element with `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.fragments.get(id).map(String::as_str)
    }

    /// Fragments in page order.
    pub fn fragments(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fragments.iter().map(|(id, html)| (*id, html.as_str()))
    }

    /// All fragments joined, one per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.fragments.values().map(String::as_str).collect::<Vec<_>>().join("\n")
    }
}

/// Renders the page from application state.
#[must_use]
pub fn render(state: &AppState) -> RenderedPage {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &PageViewModel) -> RenderedPage {
    let mut page = RenderedPage::default();

    page.insert(ids::QUERY, filters::render_query(&vm.filters));
    page.insert(ids::PUBLICATION_TYPE, filters::render_publication_type(&vm.filters));
    page.insert(ids::SORTING, filters::render_sorting(&vm.filters));
    page.insert(ids::CLEAR_FILTERS, filters::render_clear_filters());

    page.insert(ids::RESULTS_NUMBER, results::render_counter(&vm.results));
    page.insert(ids::RESULTS_ERROR, results::render_error(&vm.results));
    page.insert(ids::RESULTS_NOT_FOUND, results::render_not_found(&vm.results));
    page.insert(ids::RESULTS, results::render_results(&vm.results));

    page.insert(ids::SELECTED_LIST, selection::render_list(&vm.selection));
    page.insert(
        ids::CART_COUNT_BADGE,
        selection::render_badge(ids::CART_COUNT_BADGE, vm.selection.count_badge),
    );
    page.insert(
        ids::SIDEBAR_COUNT,
        selection::render_badge(ids::SIDEBAR_COUNT, vm.selection.sidebar_badge),
    );
    page.insert(ids::HIDDEN_IDS, selection::render_hidden_ids(&vm.selection));
    page.insert(ids::CREATE_BUTTON, selection::render_create_button(&vm.selection));
    page.insert(ids::DOWNLOAD_BUTTON, selection::render_download_button(&vm.selection));

    page.insert(ids::CREATE_MODAL, modals::render_create_modal(&vm.create_modal));
    page.insert(ids::DOWNLOAD_MODAL, modals::render_download_modal(&vm.download_modal));

    page.insert(ids::ALERT, alert::render_alert(vm.alert.as_deref()));
    page.insert(ids::SAVED_ARCHIVE, alert::render_saved_archive(vm.saved_archive.as_ref()));

    page
}

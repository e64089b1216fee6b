//! User interface rendering layer with component-based architecture.
//!
//! This module turns the page view model into escaped HTML fragments through
//! composable rendering components, and into a plain-text summary for the
//! command-line front end.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → PageViewModel → render → RenderedPage (fragments by element id)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable HTML component renderers
//! - [`helpers`]: Escaping and attribute utilities
//! - [`summary`]: Plain-text rendering of the view model
//! - [`ids`]: Stable element ids of the page
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::AppState;
//! use dataset_explorer::ui::{ids, render};
//!
//! let state = AppState::new(String::new());
//! let page = render(&state);
//! assert!(page.get(ids::EMPTY_CART_MESSAGE).is_some());
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod summary;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel, RenderedPage};
pub use summary::summarize;
pub use viewmodel::PageViewModel;

/// Stable element ids of the explore page.
pub mod ids {
    use crate::domain::DatasetId;

    pub const QUERY: &str = "query";
    pub const PUBLICATION_TYPE: &str = "publication_type";
    pub const SORTING: &str = "sorting";
    pub const CLEAR_FILTERS: &str = "clear-filters";

    pub const RESULTS: &str = "results";
    pub const RESULTS_NOT_FOUND: &str = "results_not_found";
    pub const RESULTS_NUMBER: &str = "results_number";
    pub const RESULTS_ERROR: &str = "results_error";

    pub const SELECTED_LIST: &str = "selected-datasets-list";
    pub const EMPTY_CART_MESSAGE: &str = "empty-cart-message";
    pub const CART_COUNT_BADGE: &str = "cart-count-badge";
    pub const SIDEBAR_COUNT: &str = "dataset-sidebar-count";
    pub const HIDDEN_IDS: &str = "selected-dataset-ids";
    pub const CREATE_BUTTON: &str = "create-dataset-btn";
    pub const DOWNLOAD_BUTTON: &str = "open-download-modal-btn";

    pub const CREATE_MODAL: &str = "create-dataset-modal";
    pub const DOWNLOAD_MODAL: &str = "download-dataset-modal";
    pub const ALERT: &str = "alert";
    pub const SAVED_ARCHIVE: &str = "download-status";

    /// Add control of a result card.
    #[must_use]
    pub fn add_button(id: DatasetId) -> String {
        format!("add-btn-{id}")
    }

    /// Row of the selection list.
    #[must_use]
    pub fn selection_row(id: DatasetId) -> String {
        format!("selected-dataset-{id}")
    }
}

//! View model types representing renderable page state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain
//! no business logic, only display-ready data, so every surface of the page can
//! be checked in a unit test without a browser.
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::AppState;
//!
//! let state = AppState::new(String::new());
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.selection.count_badge, 0);
//! assert!(!vm.selection.create_enabled);
//! ```

use crate::domain::DatasetId;

/// Complete view model for the explore page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    /// Filter widgets.
    pub filters: FiltersView,

    /// Result area: cards, counter, not-found indicator, error banner.
    pub results: ResultsView,

    /// Selection panel and everything derived from the selection store.
    pub selection: SelectionView,

    /// Create-from-cart dialog.
    pub create_modal: ModalView,

    /// Download-cart dialog.
    pub download_modal: ModalView,

    /// Blocking alert message, if one is pending.
    pub alert: Option<String>,

    /// Most recently saved archive, shown after a successful download.
    pub saved_archive: Option<SavedArchiveView>,
}

/// One `<option>` or radio button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Filter widget values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiltersView {
    pub query: String,
    pub publication_types: Vec<OptionView>,
    pub sortings: Vec<OptionView>,
}

/// Result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    /// One card per dataset, in response order.
    pub cards: Vec<DatasetCard>,

    /// Caption such as `2 datasets found`. `None` before the first search.
    pub counter: Option<String>,

    /// Whether the "not found" affordance is shown.
    pub not_found_visible: bool,

    /// Inline error banner for a failed search.
    pub error: Option<String>,
}

/// A badge that re-triggers a search with its label as the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    pub label: String,
}

/// One result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetCard {
    pub id: DatasetId,
    pub title: String,
    pub title_href: String,
    pub publication_type: BadgeView,
    pub created_at: String,
    pub description: String,
    pub authors: Vec<String>,
    pub tags: Vec<BadgeView>,
    pub view_href: String,
    pub download_href: String,
    pub download_label: String,
    pub add_button: AddButtonView,
}

/// The "add to selection" control of a card.
///
/// Derived from selection membership on every computation, never tracked separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddButtonView {
    pub disabled: bool,
    pub label: &'static str,
}

/// One removable row of the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRowView {
    pub id: DatasetId,
    pub title: String,
    /// Transient duplicate-add acknowledgment.
    pub pulsing: bool,
}

/// Selection panel and dependent surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionView {
    /// Rows in insertion order.
    pub rows: Vec<SelectionRowView>,

    /// Placeholder shown instead of rows when the selection is empty.
    pub empty_message: Option<&'static str>,

    /// Count shown in the panel badge.
    pub count_badge: usize,

    /// Count shown in the sidebar badge.
    pub sidebar_badge: usize,

    /// Comma-joined ids for the hidden form field.
    pub hidden_ids: String,

    pub create_enabled: bool,
    pub download_enabled: bool,
}

/// Open/closed state of a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub open: bool,
}

/// Saved-archive notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArchiveView {
    pub path: String,
    pub bytes: u64,
}

//! Modal dialog and search status state types.
//!
//! These small enums drive which overlay is visible and what the results area
//! shows between requests.
//!
//! # State Machine
//!
//! At most one modal dialog is open at a time:
//! - **`CreateDataset`**: metadata + attachments form for create-from-cart
//! - **`DownloadCart`**: archive filename form for download-cart
//!
//! The results area moves through [`SearchStatus`]:
//!
//! ```text
//! Idle ──dispatch──► Searching ──response──► Loaded
//!                        ▲     └──failure──► Failed
//!                        └──────dispatch─────┘
//! ```

/// Modal dialogs of the explore page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    /// "Create my own dataset" dialog.
    CreateDataset,
    /// "Download selection" dialog.
    DownloadCart,
}

impl Modal {
    /// Stable element id of the dialog.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::CreateDataset => crate::ui::ids::CREATE_MODAL,
            Self::DownloadCart => crate::ui::ids::DOWNLOAD_MODAL,
        }
    }
}

/// Lifecycle of the latest search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// No search has been issued yet.
    #[default]
    Idle,
    /// A search is outstanding. Results from the previous response stay visible.
    Searching,
    /// The latest response was applied.
    Loaded,
    /// The latest search failed; the message is shown inline.
    Failed(String),
}

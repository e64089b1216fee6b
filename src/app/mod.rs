//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! runtime (main.rs) and the domain/ui/worker layers. It implements the
//! event-driven architecture that powers the explore page.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Modal dialog and search status types
//! - [`selection`]: The selection store (cart)
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(String::new());
//! let (_render, actions) = handle_event(&mut state, &Event::ClearFilters)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, CreateDatasetForm, Event};
pub use modes::{Modal, SearchStatus};
pub use selection::{SelectionEntry, SelectionStore};
pub use state::AppState;

//! Composable HTML component renderers.
//!
//! Each component renders one surface of the page from its slice of the view
//! model. Every function is pure and returns a complete element carrying its
//! stable id, so the renderer can key fragments by id.
//!
//! # Components
//!
//! - [`filters`]: Query field, publication type select, sort radios, clear control
//! - [`results`]: Result cards, counter, not-found indicator, error banner
//! - [`selection`]: Selection list, count badges, hidden id field, workflow triggers
//! - [`modals`]: Create-from-cart and download-cart dialogs
//! - [`alert`]: Blocking alert and saved-archive notice

pub mod alert;
pub mod filters;
pub mod modals;
pub mod results;
pub mod selection;

//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The runtime executes
//! them in order through [`ExplorerWorker::execute`](crate::worker::ExplorerWorker::execute).
//!
//! # Example
//!
//! ```rust
//! use dataset_explorer::app::Action;
//! use dataset_explorer::domain::{PublicationTypeFilter, Sorting};
//! use dataset_explorer::worker::{SearchRequest, WorkerMessage};
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::Search {
//!     generation: 1,
//!     request: SearchRequest {
//!         csrf_token: String::new(),
//!         query: String::new(),
//!         publication_type: PublicationTypeFilter::Any,
//!         sorting: Sorting::Newest,
//!     },
//! })];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::DatasetId;
use crate::worker::WorkerMessage;
use std::time::Duration;

/// How long a duplicate-add pulse stays on a selection row.
pub const PULSE_DURATION: Duration = Duration::from_millis(300);

/// Commands representing side effects to be executed by the runtime.
///
/// Actions are the boundary between pure state transitions and effectful
/// operations (network requests, timers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands an outbound request to the worker.
    ///
    /// The worker answers asynchronously with an
    /// [`Event::WorkerResponse`](crate::app::Event::WorkerResponse).
    PostToWorker(WorkerMessage),

    /// Clears the duplicate-add pulse of a selection row after `delay`.
    ///
    /// The runtime answers with [`Event::PulseExpired`](crate::app::Event::PulseExpired).
    ClearPulseAfter {
        /// Row whose pulse should end.
        id: DatasetId,
        /// Time to wait before clearing.
        delay: Duration,
    },
}

//! Background worker for asynchronous request execution.
//!
//! This module implements the worker that performs all network and file I/O
//! so the event handler stays synchronous and pure.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types
//! - `client`: HTTP client for the explore endpoints
//! - `handler`: Worker implementation and message processing logic

pub mod client;
pub mod handler;
pub mod messages;

pub use client::ExploreClient;
pub use handler::ExplorerWorker;
pub use messages::{
    CreateFromCartRequest, CreateOutcome, DownloadCartRequest, Failure, SavedArchive, SearchRequest,
    WorkerMessage, WorkerResponse,
};

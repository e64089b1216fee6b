//! Command-line front end and entry point.
//!
//! This module provides the thin integration layer between the library and a
//! terminal. Lines typed on stdin are translated to library events, handled,
//! and the resulting actions are executed by the worker; worker completions
//! come back over a channel and go through the same handler.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        tokio runtime         │
//! │  ┌────────────────────────┐  │
//! │  │ command loop (select!) │  │  ← stdin lines + worker events
//! │  └────────────────────────┘  │
//! │        │ Action   ▲ Event    │
//! │        ▼          │          │
//! │  ┌────────────────────────┐  │
//! │  │ ExplorerWorker tasks   │  │  ← HTTP, archive writes, timers
//! │  └────────────────────────┘  │
//! └──────────────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `search <text>`: Set the query field
//! - `type <any|value>`: Set the publication type filter
//! - `sort <newest|oldest>`: Set the sort order
//! - `clear`: Reset all filters
//! - `tag <label>` / `badge <label>`: Click a tag or publication type badge
//! - `add <id>` / `remove <id>`: Change the selection
//! - `open create|download` / `close create|download`: Show or hide a dialog
//! - `create <title>|<description>|<type>|<tags>|<file,...>`: Submit the create dialog
//! - `download [filename]`: Submit the download dialog
//! - `dismiss`: Acknowledge the alert
//! - `show`, `html`, `help`, `quit`

#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use dataset_explorer::app::{CreateDatasetForm, Modal};
use dataset_explorer::domain::{DatasetId, PublicationTypeFilter, Sorting};
use dataset_explorer::infrastructure::{expand_tilde, query_param};
use dataset_explorer::worker::{ExploreClient, ExplorerWorker};
use dataset_explorer::{handle_event, Action, AppState, Config, Event, ExplorerError};

/// Command-line flags. Flags override the config file and the environment.
#[derive(Debug, Parser)]
#[command(name = "dataset-explorer", version, about = "Search datasets and act on a selection")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Server base URL
    #[arg(long)]
    base_url: Option<String>,

    /// CSRF token sent with every request
    #[arg(long)]
    csrf_token: Option<String>,

    /// Directory archives are saved to
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Tracing level (trace, debug, info, warn, error)
    #[arg(long)]
    trace_level: Option<String>,

    /// Initial search text
    #[arg(long, conflicts_with = "location")]
    query: Option<String>,

    /// Page location whose `query` parameter seeds the initial search
    #[arg(long)]
    location: Option<String>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(csrf_token) = &self.csrf_token {
            config.csrf_token.clone_from(csrf_token);
        }
        if let Some(download_dir) = &self.download_dir {
            config.download_dir = expand_tilde(download_dir);
        }
        if let Some(trace_level) = &self.trace_level {
            config.trace_level.clone_from(trace_level);
        }
    }

    fn initial_query(&self) -> Option<String> {
        match (&self.query, &self.location) {
            (Some(query), _) => Some(query.clone()).filter(|q| !q.trim().is_empty()),
            (None, Some(location)) => query_param(location),
            (None, None) => None,
        }
    }
}

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(Event),
    Show,
    Html,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  search <text>            set the query
  type <any|value>         publication type filter
  sort <newest|oldest>     sort order
  clear                    reset filters
  tag <label>              click a tag badge
  badge <label>            click a publication type badge
  add <id> | remove <id>   change the selection
  open create|download     open a dialog
  close create|download    close a dialog
  create <title>|<description>|<type>|<tags>|<file,...>
  download [filename]      download the selection
  dismiss                  acknowledge the alert
  show | html | help | quit";

fn parse_modal(arg: &str) -> Result<Modal, ExplorerError> {
    match arg.trim() {
        "create" => Ok(Modal::CreateDataset),
        "download" => Ok(Modal::DownloadCart),
        other => Err(ExplorerError::InvalidInput(format!("unknown dialog '{other}'"))),
    }
}

fn parse_create_form(arg: &str) -> CreateDatasetForm {
    let mut fields = arg.splitn(5, '|').map(str::trim);
    let mut next = || fields.next().unwrap_or_default().to_string();

    let title = next();
    let description = next();
    let publication_type = Some(next()).filter(|t| !t.is_empty()).unwrap_or_else(|| "none".to_string());
    let tags = next();
    let attachments = next()
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| expand_tilde(Path::new(p)))
        .collect();

    CreateDatasetForm {
        title,
        description,
        publication_type,
        tags,
        attachments,
    }
}

/// Translates an input line into a command. Card clicks look the title up in
/// the current results, as the card carries it in the page.
fn parse_command(line: &str, app: &AppState) -> Result<Option<Command>, ExplorerError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let arg = arg.trim();

    let event = match verb {
        "search" => Event::QueryInput(arg.to_string()),
        "type" => Event::PublicationTypeSelected(arg.parse::<PublicationTypeFilter>()?),
        "sort" => Event::SortingSelected(arg.parse::<Sorting>()?),
        "clear" => Event::ClearFilters,
        "tag" => Event::TagClicked(arg.to_string()),
        "badge" => Event::PublicationTypeBadgeClicked(arg.to_string()),
        "add" => {
            let id: DatasetId = arg.parse()?;
            let dataset = app
                .result_by_id(id)
                .ok_or_else(|| ExplorerError::InvalidInput(format!("dataset {id} is not in the current results")))?;
            Event::AddToSelection {
                id,
                title: dataset.title.clone(),
            }
        }
        "remove" => Event::RemoveFromSelection { id: arg.parse()? },
        "open" => Event::OpenModal(parse_modal(arg)?),
        "close" => Event::CloseModal(parse_modal(arg)?),
        "create" => Event::SubmitCreate(parse_create_form(arg)),
        "download" => Event::SubmitDownload {
            filename: arg.to_string(),
        },
        "dismiss" => Event::DismissAlert,
        "show" => return Ok(Some(Command::Show)),
        "html" => return Ok(Some(Command::Html)),
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        other => return Err(ExplorerError::InvalidInput(format!("unknown command '{other}', try 'help'"))),
    };
    Ok(Some(Command::Event(event)))
}

/// Worker requests started but not yet answered.
#[derive(Debug, Default)]
struct Pending(usize);

impl Pending {
    fn track(&mut self, event: &Event, actions: &[Action]) {
        if matches!(event, Event::WorkerResponse(_)) {
            self.0 = self.0.saturating_sub(1);
        }
        self.0 += actions.iter().filter(|a| matches!(a, Action::PostToWorker(_))).count();
    }
}

/// Handles one event and starts its actions. Returns whether to re-render.
fn dispatch(app: &mut AppState, worker: &ExplorerWorker, event: &Event, pending: &mut Pending) -> bool {
    match handle_event(app, event) {
        Ok((should_render, actions)) => {
            pending.track(event, &actions);
            tracing::debug!(
                action_count = actions.len(),
                should_render = should_render,
                pending = pending.0,
                "event handled successfully"
            );
            for action in actions {
                worker.execute(action);
            }
            should_render
        }
        Err(e) => {
            pending.track(event, &[]);
            tracing::debug!(error = %e, "error handling event");
            eprintln!("error: {e}");
            false
        }
    }
}

/// Keeps handling worker events until nothing is in flight or `wait` elapses.
/// Returns the number of requests still unanswered.
async fn drain(
    app: &mut AppState,
    worker: &ExplorerWorker,
    events_rx: &mut mpsc::UnboundedReceiver<Event>,
    pending: &mut Pending,
    wait: Duration,
) -> usize {
    let deadline = tokio::time::Instant::now() + wait;
    while pending.0 > 0 {
        match tokio::time::timeout_at(deadline, events_rx.recv()).await {
            Ok(Some(event)) => {
                if dispatch(app, worker, &event, pending) {
                    print_summary(app);
                }
            }
            Ok(None) | Err(_) => break,
        }
    }
    pending.0
}

fn print_summary(app: &AppState) {
    println!("{}", dataset_explorer::ui::summarize(&app.compute_viewmodel()));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    cli.apply(&mut config);
    dataset_explorer::observability::init_tracing(&config);

    let span = tracing::debug_span!("startup");
    let guard = span.enter();
    tracing::debug!(base_url = %config.base_url, download_dir = %config.download_dir.display(), "configuration resolved");

    let client = ExploreClient::new(&config.base_url, config.request_timeout())
        .context("creating HTTP client")?;
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let worker = ExplorerWorker::new(client, config.download_dir.clone(), events_tx);
    let mut app = dataset_explorer::initialize(&config);

    let page_loaded = Event::PageLoaded {
        query: cli.initial_query(),
    };
    let mut pending = Pending::default();
    if dispatch(&mut app, &worker, &page_loaded, &mut pending) {
        print_summary(&app);
    }
    drop(guard);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_closed = false;
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    stdin_closed = true;
                    break;
                };
                match parse_command(&line, &app) {
                    Ok(None) => {}
                    Ok(Some(Command::Event(event))) => {
                        if dispatch(&mut app, &worker, &event, &mut pending) {
                            print_summary(&app);
                        }
                    }
                    Ok(Some(Command::Show)) => print_summary(&app),
                    Ok(Some(Command::Html)) => println!("{}", dataset_explorer::ui::render(&app).to_html()),
                    Ok(Some(Command::Help)) => println!("{HELP}"),
                    Ok(Some(Command::Quit)) => break,
                    Err(e) => eprintln!("error: {e}"),
                }
            }
            Some(event) = events_rx.recv() => {
                if dispatch(&mut app, &worker, &event, &mut pending) {
                    print_summary(&app);
                }
            }
        }
    }

    let abandoned = if stdin_closed {
        drain(&mut app, &worker, &mut events_rx, &mut pending, config.request_timeout()).await
    } else {
        pending.0
    };
    if abandoned > 0 {
        tracing::warn!(abandoned = abandoned, "exiting with requests in flight");
        eprintln!("warning: {abandoned} request(s) abandoned");
    }

    tracing::debug!(selected = app.selection.len(), "shutting down");
    Ok(())
}

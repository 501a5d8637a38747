//! Terminal front end and entry point.
//!
//! This is the thin integration layer between the EpiCurious library and the
//! terminal. It reads one command per line, feeds events to the library's
//! reducer, runs the resulting actions and prints the rendered frame.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │   tokio current_thread runtime            │
//! │  ┌─────────────────────────────────────┐  │
//! │  │  event loop (select!)               │  │  ← stdin lines, worker responses
//! │  │  AppState + handle_event + render   │  │  ← single writer of state
//! │  └─────────────────────────────────────┘  │
//! │          │ WorkerMessage  ▲ WorkerResponse│
//! │          ▼                │ (mpsc)        │
//! │  ┌─────────────────────────────────────┐  │
//! │  │  SearchWorker tasks (one per fetch) │  │  ← HTTP requests
//! │  └─────────────────────────────────────┘  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Configure**: Parse flags, merge with the config file, validate
//! 2. **Trace**: Install the file-exporting tracing subscriber
//! 3. **Start**: Build state and worker, draw the first frame, run `--query`
//! 4. **Loop**: Map each input line or worker response to an event
//! 5. **Exit**: On `quit`, or at end of input once no search is in flight
//!
//! Type `help` at the prompt for the command list.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use epicurious::cli::Cli;
use epicurious::worker::{HttpRecipeSource, SearchWorker, WorkerResponse};
use epicurious::{handle_event, input_event, Action, AppState, Config, Event, FetchStatus, RecipeError, Result};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::sync::mpsc;

const PROMPT: &str = "epicurious> ";
const CLEAR_SCREEN: &str = "\u{1b}[2J\u{1b}[H";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("epicurious: {e}");
            return ExitCode::from(2);
        }
    };

    epicurious::observability::init_tracing(&config);

    match run(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal session failed");
            eprintln!("epicurious: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal session wrapping the library state.
///
/// Owns everything the reducer must not: the worker handle, the output stream
/// and the layout width.
struct Shell {
    app: AppState,
    worker: SearchWorker<HttpRecipeSource>,
    stdout: Stdout,
    width: usize,
    clear_screen: bool,
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    let source = HttpRecipeSource::new(&config.api_base_url, config.request_timeout())?;
    let (responses_tx, mut responses) = mpsc::unbounded_channel::<WorkerResponse>();

    let mut shell = Shell {
        app: epicurious::initialize(config),
        worker: SearchWorker::new(source, responses_tx),
        stdout: tokio::io::stdout(),
        width: cli.width,
        clear_screen: std::io::stdout().is_terminal(),
    };
    tracing::info!(api = %config.api_base_url, "session started");

    shell.draw().await?;
    if let Some(query) = &cli.query {
        shell.dispatch(Event::ChangeSearchTerm(query.clone())).await?;
    }

    let mut input = BufReader::new(tokio::io::stdin());
    let mut line = Vec::new();
    let mut input_open = true;

    loop {
        // `line` survives a cancelled read so a partial line is not lost; an
        // empty buffer after a read means end of input.
        let event = tokio::select! {
            read = input.read_until(b'\n', &mut line), if input_open => match read {
                Ok(_) if !line.is_empty() => {
                    let event = input_event(&line, &shell.app);
                    line.clear();
                    match event {
                        Some(event) => event,
                        None => {
                            shell.prompt().await?;
                            continue;
                        }
                    }
                }
                Ok(_) => {
                    tracing::debug!("end of input");
                    input_open = false;
                    if shell.app.status == FetchStatus::Loading {
                        continue;
                    }
                    Event::Quit
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "reading input failed, closing input");
                    line.clear();
                    input_open = false;
                    if shell.app.status == FetchStatus::Loading {
                        continue;
                    }
                    Event::Quit
                }
            },
            Some(response) = responses.recv() => Event::WorkerResponse(response),
            else => return Err(RecipeError::Worker("search response channel closed".to_string())),
        };

        if shell.dispatch(event).await? == Flow::Quit {
            break;
        }
        if !input_open && shell.app.status != FetchStatus::Loading {
            break;
        }
    }

    shell.stdout.write_all(b"\n").await?;
    shell.stdout.flush().await?;
    tracing::info!("session ended");
    Ok(())
}

impl Shell {
    /// Runs one event through the reducer and executes the resulting actions.
    async fn dispatch(&mut self, event: Event) -> Result<Flow> {
        let (should_render, actions) = {
            let _span = tracing::debug_span!("dispatch").entered();
            let outcome = handle_event(&mut self.app, &event)?;
            tracing::debug!(action_count = outcome.1.len(), should_render = outcome.0, "event handled");
            outcome
        };

        let mut flow = Flow::Continue;
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    // Responses arrive on the channel; the handle is not needed.
                    drop(self.worker.post(message));
                }
                Action::Quit => flow = Flow::Quit,
            }
        }

        if flow == Flow::Continue {
            if should_render {
                self.draw().await?;
            } else {
                self.prompt().await?;
            }
        }
        Ok(flow)
    }

    /// Prints the current frame followed by the prompt.
    async fn draw(&mut self) -> Result<()> {
        let mut frame = String::new();
        if self.clear_screen {
            frame.push_str(CLEAR_SCREEN);
        }
        frame.push_str(&epicurious::ui::render(&self.app, self.width));
        frame.push_str(PROMPT);

        self.stdout.write_all(frame.as_bytes()).await?;
        self.stdout.flush().await?;
        Ok(())
    }

    async fn prompt(&mut self) -> Result<()> {
        self.stdout.write_all(PROMPT.as_bytes()).await?;
        self.stdout.flush().await?;
        Ok(())
    }
}

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use entity_search::app::App;
use entity_search::config::load_config;
use entity_search::lookup::{SuggestionClient, spawn_worker};

/// How long to wait for input before polling lookup results again
const TICK: Duration = Duration::from_millis(50);

/// Log file path; logging is off when unset
const LOG_ENV: &str = "ENTITY_SEARCH_LOG";

/// Search a remote entity endpoint and pick results
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Suggestion endpoint base URL; the query is appended as the last path segment
    #[arg(long, env = "ENTITY_SEARCH_ENDPOINT")]
    endpoint: Option<String>,

    /// Config file (default: ~/.config/entity-search/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging()?;

    let config = load_config(args.config.as_deref())?;
    let base_url = args
        .endpoint
        .unwrap_or_else(|| config.endpoint.base_url.clone());
    let client = SuggestionClient::new(base_url)?;
    log::debug!("Using suggestion endpoint {}", client.base_url());

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client, request_rx, response_tx);

    let mut app = App::with_lookup(&config, request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture, EnableBracketedPaste)
        .map_err(color_eyre::Report::from)
        .and_then(|_| run(terminal, &mut app));

    // Restore terminal even if the loop failed
    let _ = execute!(io::stdout(), DisableMouseCapture, DisableBracketedPaste);
    ratatui::restore();

    result?;

    if app.output_selection() {
        println!("{}", app.selection_json()?);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events(TICK)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Send log output to the file named by ENTITY_SEARCH_LOG, since the TUI owns the terminal
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };

    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

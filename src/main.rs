//! LazyBooks - Terminal-based book collection tracker
//!
//! Launches the terminal UI when run without a subcommand; subcommands give
//! scriptable access to the same collection.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lazybooks::cli::{
    AddArgs, CliResult, ConfigArgs, DeleteArgs, ListArgs, ProgressArgs, SearchArgs, UpdateArgs,
};
use lazybooks::config::Config;
use lazybooks::constants::APP_NAME;
use lazybooks::logging;
use lazybooks::services::BookStore;
use lazybooks::tui;

/// LazyBooks - Terminal-based book collection tracker
#[derive(Parser, Debug)]
#[command(name = "lazybooks", author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON book file (overrides the configured store)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every book
    List(ListArgs),
    /// Add a new book
    Add(AddArgs),
    /// Search books by title or author
    Search(SearchArgs),
    /// Update a book by title
    Update(UpdateArgs),
    /// Delete books by title
    Delete(DeleteArgs),
    /// Show reading progress
    Progress(ProgressArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self, store: &BookStore) -> CliResult<()> {
        match self {
            Self::List(args) => args.execute(store),
            Self::Add(args) => args.execute(store),
            Self::Search(args) => args.execute(store),
            Self::Update(args) => args.execute(store),
            Self::Delete(args) => args.execute(store),
            Self::Progress(args) => args.execute(store),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e:#}");
        Config::default()
    });

    // Logging is best effort; the app runs without it
    let filter = logging::build_filter(&config.logging.level, cli.verbose);
    if let Err(e) = Config::log_dir().and_then(|dir| logging::init_logging(&dir, filter)) {
        if cli.verbose {
            eprintln!("Warning: logging disabled: {e:#}");
        }
    }

    let store = BookStore::new(config.resolve_store_path(cli.file.as_deref()));
    tracing::debug!(store = %store.path().display(), "resolved book file");

    if let Some(command) = &cli.command {
        if let Err(e) = command.execute(&store) {
            tracing::error!(code = e.exit_code.code(), error = %e, "command failed");
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code.code());
        }
        return Ok(());
    }

    run_interactive(store, config)
}

/// Run the terminal UI until the user quits.
fn run_interactive(store: BookStore, config: Config) -> Result<()> {
    let mut app_state = tui::AppState::new(store, config)?;

    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut app_state, &mut terminal);
    tui::restore_terminal(terminal)?;

    result?;
    tracing::info!("{APP_NAME} exited");
    Ok(())
}

//! notepad - a simple notepad for the terminal

pub mod cli;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod store;
pub mod tui;
pub mod view;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_completions, handle_edit, handle_list, handle_new, handle_rm, handle_search,
        handle_show,
    },
};
use logging::{init_logging, normalize_level, raise_level};
use store::{FileStore, NoteStore};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if let Some(Command::Completions(args)) = &cli.command {
        return handle_completions(args);
    }

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    let locale = config.locale();

    // Keep the handle alive until exit so buffered logs are flushed.
    let _logger = match normalize_level(config.log_level())
        .and_then(|level| init_logging(raise_level(level, cli.verbose), &data_dir.join("logs")))
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    };

    let storage = FileStore::open(&data_dir)
        .with_context(|| format!("failed to open note store in {}", data_dir.display()))?;
    info!("event=store_open dir={}", storage.dir().display());
    let mut store = NoteStore::load(storage);

    let result = match &cli.command {
        None | Some(Command::Ui) => tui::run(store, locale),
        Some(Command::List(args)) => handle_list(args, &store, locale),
        Some(Command::Search(args)) => handle_search(args, &store, locale),
        Some(Command::New(args)) => handle_new(args, &mut store),
        Some(Command::Show(args)) => handle_show(args, &store, locale),
        Some(Command::Edit(args)) => handle_edit(args, &mut store, &config),
        Some(Command::Rm(args)) => handle_rm(args, &mut store),
        Some(Command::Completions(args)) => handle_completions(args),
    };

    if let Err(err) = &result {
        warn!("event=command_failed error={err:#}");
    }
    result
}

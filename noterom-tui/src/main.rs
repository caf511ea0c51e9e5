mod app;
mod cli;
mod config;
mod dev_data;
mod logging;
mod runtime;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::NoteromConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use noterom_core::resolver::snapshot;
use noterom_core::{ClassStore, Clock, FileSlot, StorageSlot, SystemClock};
use ratatui::{backend::CrosstermBackend, Terminal};
use runtime::Timers;
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = NoteromConfig::load()?;

    let log_path = NoteromConfig::log_path()?;
    logging::init(&log_path, cfg.log_filter.as_deref())?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = NoteromConfig::config_path()?;
            if !path.exists() {
                NoteromConfig::default().save()?;
                println!("Created default config at {}", path.display());
            } else {
                println!("{}", path.display());
            }
        }
        Commands::List => {
            let data_file = cfg.resolve_data_file(cli.data_file)?;
            list_classes(Box::new(FileSlot::new(data_file)), &SystemClock);
        }
        Commands::Run => {
            let data_file = cfg.resolve_data_file(cli.data_file)?;
            tracing::info!("Starting with classes from {}", data_file.display());
            run_tui(Box::new(FileSlot::new(data_file)), &cfg)?;
        }
        Commands::Dev => {
            tracing::info!("Starting in dev mode with in-memory classes");
            let slot = dev_data::seeded_slot(&SystemClock).context("Failed to seed dev data")?;
            run_tui(Box::new(slot), &cfg)?;
        }
    }

    Ok(())
}

fn list_classes(slot: Box<dyn StorageSlot>, clock: &dyn Clock) {
    let store = ClassStore::open(slot);
    if store.is_empty() {
        println!("{}", ui::view_model::EMPTY_HINT);
        return;
    }

    let snap = snapshot(store.entries(), None, clock.now());
    let cards = ui::view_model::class_cards(store.entries(), None, snap.active_id.as_deref());
    for (i, card) in cards.iter().enumerate() {
        let marker = if card.is_active { "*" } else { " " };
        println!("{} {}. {}  {}", marker, i + 1, card.title, card.meta);
    }
    println!("\n{}", snap.status_line);
}

fn run_tui(slot: Box<dyn StorageSlot>, cfg: &NoteromConfig) -> Result<()> {
    let store = ClassStore::open(slot);
    tracing::info!(
        "Loaded {} classes from {}",
        store.len(),
        store.storage_location()
    );
    let mut app = App::new(store, Box::new(SystemClock));
    let timers = Timers {
        clock_tick: cfg.clock_tick(),
        active_refresh: cfg.active_refresh(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, timers);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("Event loop failed: {:?}", err);
    }
    res
}

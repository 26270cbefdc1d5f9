//! econ-explorer - terminal dashboard for stock, inflation and GDP data.

mod app;
mod event;
#[cfg(test)]
mod test_support;
mod ui;
mod widgets;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use explorer::{Explorer, ExplorerConfig};
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use event::{handle_key_event, poll_event};
use ui::draw_ui;

#[derive(Parser)]
#[command(name = "econ-explorer")]
#[command(about = "Financial Data Explorer", long_about = None)]
struct Cli {
    /// Load settings from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Log file (the terminal is used by the dashboard)
    #[arg(long, default_value = "econ-explorer.log")]
    log_file: PathBuf,

    /// Load this ticker symbol on start
    #[arg(short, long)]
    symbol: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    ExplorerConfig::load_env_file(cli.env_file.as_deref())?;
    let config = ExplorerConfig::from_env()?;
    info!(?config, "Starting");
    let explorer = Explorer::from_config(&config)?;

    let mut app = App::new(explorer);
    if let Some(symbol) = &cli.symbol {
        app.load_stock(symbol);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }

    Ok(())
}

/// Send tracing output to `path`; stdout belongs to the dashboard.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        app.clear_expired_status();

        if let Some(Event::Key(key)) = poll_event(tick_rate)? {
            handle_key_event(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

// octoview - Service-mesh octopus graph for the terminal
// Shows a resource, its upstreams and its downstreams with live golden metrics

mod app;
mod mesh;
mod metrics;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::{event::handle_key_event, AppState, RefreshConfig};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Mesh snapshot (JSON) to visualize; reloaded periodically
    snapshot: PathBuf,

    /// Id of the resource to focus first, e.g. "emojivoto/deployment/web"
    #[arg(long)]
    focus: Option<String>,

    /// UI refresh interval in milliseconds
    #[arg(long, default_value_t = app::config::DEFAULT_REFRESH_MS)]
    refresh_ms: u64,

    /// Write logs to this file (stdout belongs to the TUI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install a file-backed tracing subscriber, filtered by RUST_LOG (default: info)
fn init_logging(path: &Path) -> Result<()> {
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

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let app = AppState::from_path(
        args.snapshot.clone(),
        args.focus.clone(),
        RefreshConfig::with_interval(args.refresh_ms),
    );
    tracing::info!(
        snapshot = %args.snapshot.display(),
        focus = ?app.focus,
        "Starting octoview"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "octoview exited with an error");
        println!("Error: {:?}", err);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: AppState) -> Result<()> {
    loop {
        app.on_tick();
        terminal.draw(|f| ui::draw(f, &app))?;

        if !app.running {
            return Ok(());
        }

        if event::poll(app.refresh_config.ui_interval())? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(&mut app, key.code);
                }
            }
        }
    }
}

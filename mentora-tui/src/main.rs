//! mentora - AI Learning Assistant
//!
//! Terminal front end: describe a learning goal, chat with the assistant,
//! and browse the recommended video lessons next to the conversation.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mentora_core::{ApiClient, Config};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "mentora", version, about)]
struct Cli {
    /// Path to a config file (defaults to the XDG location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the collaborator base URL from the config
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }

    // Initialize logging (to file, not stdout since we have a TUI)
    let _log_guard =
        mentora_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("mentora TUI starting up");

    // One current-thread runtime for blocking on collaborator calls. The
    // UI deliberately blocks while a submission is in flight: the
    // append/send/merge sequence of one submission can never interleave
    // with another.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create async runtime")?;

    let client = ApiClient::new(config.api.clone()).context("failed to create API client")?;

    // Create app and resolve the session gate (the mount-time check)
    let mut app = App::new(client, config.ui.clone(), runtime);
    app.check_session();

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    tracing::info!("mentora TUI shutting down");

    result
}

/// Run the main application loop.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Render
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Process any submit request raised by the key handler
        app.drive();

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

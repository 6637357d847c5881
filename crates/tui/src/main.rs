//! Intake TUI - terminal intake form.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and the async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Input translation or state mutation (see `intake_tui::app`).
//! - Rendering (see `intake_tui::ui`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > defaults.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use intake_config::load_dotenv;
use intake_tui::action::Action;
use intake_tui::app::App;
use intake_tui::cli::Cli;
use intake_tui::runtime::terminal::TerminalGuard;
use intake_tui::submit::{SubmitSink, TracingSink};
use intake_tui::ui;

/// Bounded channel capacity; input bursts are tiny for a single form.
const ACTION_CHANNEL_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    load_dotenv();

    // File-based logging; the TUI owns stdout.
    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "intake-tui.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = cli.resolve_config()?;
    tracing::info!(?config, "Starting intake-tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Ensure terminal restoration on panic/unwind.
    let _terminal_guard = TerminalGuard::new();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(ACTION_CHANNEL_CAPACITY);

    // Forward terminal events into the action channel.
    tokio::spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    Some(Action::Input(key))
                }
                Ok(Event::Resize(width, height)) => Some(Action::Resize(width, height)),
                Ok(_) => None,
                Err(_) => break,
            };
            if let Some(action) = action
                && tx.send(action).await.is_err()
            {
                // Channel closed, exit task
                break;
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(config.tick_ms));

    let mut app = App::new(config);
    let sink = TracingSink;

    // Main event loop
    loop {
        terminal.draw(|f| ui::render(f, &mut app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                if let Action::Input(key) = action {
                    if let Some(follow) = app.handle_input(key) {
                        if matches!(follow, Action::Quit) {
                            break;
                        }
                        let submitted = matches!(follow, Action::SubmitRequested);
                        app.update(follow);
                        if submitted {
                            sink.deliver(&app.form);
                        }
                    }
                } else {
                    app.update(action);
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Explicit cleanup on normal exit; the guard covers panics.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(
        submissions = app.submission_count,
        "Shutting down intake-tui"
    );
    Ok(())
}

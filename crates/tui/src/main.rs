//! Tours TUI - browse available tours in the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - HTTP or payload decoding (see `crates/client`).
//! - Configuration parsing (see `crates/config`).
//! - Async retrieval (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - The tours screen is activated exactly once, before the first event is handled.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tokio_util::sync::CancellationToken;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tours_client::ToursClient;
use tours_config::Theme;
use tours_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use tours_tui::action::Action;
use tours_tui::app::App;
use tours_tui::cli::Cli;
use tours_tui::runtime::{
    config::load_config,
    input::spawn_input_task,
    side_effects::{TaskTracker, handle_side_effects},
    terminal::TerminalGuard,
};

/// How long shutdown waits for in-flight tasks before abandoning them.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "tours-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();
    // _guard must live for the entire main() duration so buffered logs are flushed.

    let config = load_config(&cli)?;
    let source = Arc::new(ToursClient::from_config(&config)?);
    tracing::info!(url = %config.tours_url, "Starting tours-tui");

    let task_tracker = TaskTracker::new();

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)?;
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let _terminal_guard = TerminalGuard::new(no_mouse);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let shutdown = CancellationToken::new();
    spawn_input_task(EventStream::new(), tx.clone(), &task_tracker, shutdown.clone());

    let mut app = App::new(Theme::from(config.theme), config.tours_url.clone());
    if let Some(action) = app.activate() {
        handle_side_effects(action, source.clone(), tx.clone(), task_tracker.clone()).await;
    }

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(action = action.type_name(), "Handling action");

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    break;
                }

                app.update(action.clone());
                handle_side_effects(action, source.clone(), tx.clone(), task_tracker.clone()).await;
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Late results are discarded once the receiver is gone.
    shutdown.cancel();
    drop(rx);
    let _ = task_tracker.close();
    if tokio::time::timeout(SHUTDOWN_GRACE, task_tracker.wait())
        .await
        .is_err()
    {
        tracing::info!("Abandoning in-flight tasks at shutdown");
    }

    disable_raw_mode()?;
    if no_mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    } else {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    }
    terminal.show_cursor()?;

    tracing::info!("tours-tui exited");
    Ok(())
}

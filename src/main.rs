use qualy::api::ErgastClient;
use qualy::app::{self, AppConfig, AppState, QualifyingQuery, Settle};
use qualy::cli::Cli;
use qualy::events::{AppEvent, EventHandler};
use qualy::fetcher::Fetcher;
use qualy::input::{self, Action};
use qualy::tui;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn setup_verbose_logging() -> Result<()> {
    let state_dir = state_dir();
    std::fs::create_dir_all(&state_dir)
        .map_err(|e| eyre!("Failed to create log directory {state_dir:?}: {e}"))?;
    let log_path = state_dir.join("debug.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eyre!("Failed to open log file {log_path:?}: {e}"))?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .init();
    tracing::info!(
        "qualy v{} starting with verbose logging",
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}

fn state_dir() -> PathBuf {
    if let Some(state) = std::env::var_os("XDG_STATE_HOME") {
        PathBuf::from(state).join("qualy")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("state").join("qualy")
    } else {
        PathBuf::from("/tmp/qualy")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    if args.verbose {
        setup_verbose_logging()?;
    }

    let config = AppConfig {
        query: QualifyingQuery::new(args.season, args.round),
        label: args.label,
        base_url: args.base_url,
        timeout_secs: args.timeout,
    };
    let client = ErgastClient::new(&config.base_url, Duration::from_secs(config.timeout_secs))?;
    tracing::info!(
        season = %config.query.season,
        round = %config.query.round,
        base_url = %config.base_url,
        "opening qualifying screen"
    );

    // Restore the terminal before the panic report is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = terminal::disable_raw_mode() {
            eprintln!("Failed to disable raw mode during panic: {e}");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            eprintln!("Failed to leave alternate screen during panic: {e}");
        }
        original_hook(panic_info);
    }));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut events = EventHandler::new(Duration::from_millis(100));
    let fetcher = Fetcher::new(Arc::new(client), config.query.clone(), events.sender());

    let mut state = AppState::new(config);
    let generation = state.initialize();
    fetcher.spawn(generation);

    let result = run_app(&mut terminal, &mut state, &mut events, &fetcher).await;

    // Late fetches must not land on a closed screen
    state.quit();
    events.stop();

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    events: &mut EventHandler,
    fetcher: &Fetcher,
) -> Result<()> {
    loop {
        terminal.draw(|f| tui::render::render(f, state))?;

        let Some(event) = events.next().await else {
            return Ok(());
        };

        match event {
            AppEvent::Key(key) => match input::map_key(key, state.view()) {
                Action::Quit => state.quit(),
                Action::Refresh => {
                    let generation = state.refresh();
                    tracing::debug!(generation, "refresh requested");
                    fetcher.spawn(generation);
                }
                Action::MoveUp => state.move_cursor_up(),
                Action::MoveDown => state.move_cursor_down(),
                Action::PageUp => state.page_up(app::PAGE_SIZE),
                Action::PageDown => state.page_down(app::PAGE_SIZE),
                Action::ScrollToTop => state.cursor_to_top(),
                Action::ScrollToBottom => state.cursor_to_bottom(),
                Action::None => {}
            },
            AppEvent::Tick => state.advance_spinner(),
            AppEvent::FetchSettled { generation, result } => {
                match state.apply_fetch(generation, result) {
                    Settle::Applied => tracing::debug!(
                        generation,
                        rows = state.screen.results.len(),
                        error = state.screen.error,
                        "fetch applied"
                    ),
                    Settle::Stale => tracing::debug!(
                        generation,
                        latest = state.screen.generation(),
                        "discarding stale fetch"
                    ),
                    Settle::Unmounted => {
                        tracing::debug!(generation, "fetch settled after unmount");
                    }
                }
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

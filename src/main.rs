use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use alien_invasion::app::App;
use alien_invasion::assets;
use alien_invasion::config;
use alien_invasion::event::EventHandler;
use alien_invasion::game::Game;
use alien_invasion::settings::Settings;
use alien_invasion::ui;

fn init_tracing() {
    let path = config::log_path();
    let Ok(file) = File::create(&path) else {
        // Nowhere to log; stdout belongs to the game.
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    tracing::info!(path = %path.display(), "logging started");
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        PopKeyboardEnhancementFlags,
        LeaveAlternateScreen,
        DisableMouseCapture
    );
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
        default_hook(info);
    }));
}

fn main() -> Result<()> {
    init_tracing();

    let ship = assets::load_ship().context("loading ship image")?;
    let alien = assets::load_alien().context("loading alien image")?;
    let settings = Settings {
        tick_interval: config::tick_interval(),
        ..Settings::new()
    };
    let tick_interval = settings.tick_interval;
    let game = Game::new(settings, ship, alien);

    // Setup terminal
    install_panic_hook();
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("entering alternate screen")?;

    // Key releases are only reported with keyboard enhancement.
    let release_events = supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();
    tracing::info!(release_events, ?tick_interval, "terminal ready");

    let result = run(App::new(game, release_events), tick_interval);

    // Restore terminal
    restore_terminal();
    if let Err(e) = &result {
        tracing::error!(error = %e, "exiting on error");
    }
    result
}

fn run(mut app: App, tick_interval: Duration) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("creating terminal")?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    let event_handler = EventHandler::new(tick_interval);

    // Main loop
    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        app.on_event(event_handler.next()?);
        // Catch up on whatever queued during the draw before drawing again.
        for event in event_handler.pending() {
            if app.should_quit {
                break;
            }
            app.on_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    terminal.show_cursor()?;
    tracing::info!(high_score = app.game.stats().high_score, "quit");
    Ok(())
}

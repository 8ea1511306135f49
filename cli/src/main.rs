//! Folio CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`folio_engine`] (application state) and [`folio_tui`] (rendering),
//! providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new(mode) -> run_app_{full,inline}() -> App + TUI
//!                                              |
//!                                              v
//!                               RunResult::Quit | SwitchMode
//! ```
//!
//! # Event Loop
//!
//! Both full-screen and inline modes use a fixed 16ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`folio_tui::InputPump`])
//! 3. Advance the timers by the measured wall-clock delta (`app.tick()`)
//! 4. Render frame
//! 5. Check for mode switch or quit

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{TerminalOptions, Viewport, prelude::*};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use folio_config::FolioConfig;
use folio_engine::{App, TypewriterSettings};
use folio_tui::{
    INLINE_VIEWPORT_HEIGHT, InputPump, clear_inline_viewport, draw, draw_inline, handle_events,
};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_folio_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, stay silent rather than writing over the TUI.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_folio_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in folio_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn folio_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.folio/logs/folio.log
    if let Some(config_path) = FolioConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("folio.log"));
    }

    // Fallback: ./.folio/logs/folio.log
    candidates.push(PathBuf::from(".folio").join("logs").join("folio.log"));

    candidates
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UiMode {
    Full,
    Inline,
}

impl UiMode {
    fn toggle(self) -> Self {
        match self {
            UiMode::Full => UiMode::Inline,
            UiMode::Inline => UiMode::Full,
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "inline" => Some(UiMode::Inline),
            "full" | "fullscreen" => Some(UiMode::Full),
            _ => None,
        }
    }

    fn from_config(config: Option<&FolioConfig>) -> Option<Self> {
        let raw = config
            .and_then(|cfg| cfg.app.as_ref())
            .and_then(|app| app.tui.as_ref())?;
        let mode = Self::parse(raw);
        if mode.is_none() {
            tracing::warn!("Unknown tui mode in config: {}", raw);
        }
        mode
    }

    fn from_env() -> Option<Self> {
        env::var("FOLIO_TUI").ok().as_deref().and_then(Self::parse)
    }
}

enum RunResult {
    Quit,
    SwitchMode,
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode in both modes, plus the alternate screen and mouse
/// capture in full mode. Inline mode leaves the mouse to the host terminal
/// so scrollback selection keeps working.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    use_alternate_screen: bool,
}

impl TerminalSession {
    fn new(mode: UiMode) -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        let use_alternate_screen = matches!(mode, UiMode::Full);
        if use_alternate_screen
            && let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture)
        {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match mode {
            UiMode::Full => Terminal::new(backend),
            UiMode::Inline => Terminal::with_options(
                backend,
                TerminalOptions {
                    viewport: Viewport::Inline(INLINE_VIEWPORT_HEIGHT),
                },
            ),
        };
        let terminal = match terminal {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                if use_alternate_screen {
                    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
                }
                return Err(err.into());
            }
        };

        Ok(Self {
            terminal,
            use_alternate_screen,
        })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.use_alternate_screen {
            let _ = execute!(
                self.terminal.backend_mut(),
                DisableMouseCapture,
                LeaveAlternateScreen
            );
        } else {
            let _ = clear_inline_viewport(&mut self.terminal);
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Load config, falling back to built-in defaults when the file is unusable.
fn load_config() -> Option<FolioConfig> {
    match FolioConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}; using built-in defaults");
            tracing::warn!(path = %err.path().display(), "config unusable, using defaults");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config();
    let settings = match config.as_ref() {
        Some(config) => config
            .typewriter_settings()
            .context("invalid [typewriter] settings")?,
        None => TypewriterSettings::default(),
    };
    let ui_options = config
        .as_ref()
        .map(FolioConfig::ui_options)
        .unwrap_or_default();
    let profile = config.as_ref().map_or_else(
        || folio_config::default_profile().clone(),
        FolioConfig::profile,
    );

    let mut ui_mode = UiMode::from_config(config.as_ref())
        .or_else(UiMode::from_env)
        .unwrap_or(UiMode::Full);
    let mut app = App::new(settings, profile, ui_options)?;
    tracing::info!(?ui_mode, "starting");

    loop {
        let run_result = {
            let mut session = TerminalSession::new(ui_mode)?;
            match ui_mode {
                UiMode::Full => run_app_full(&mut session.terminal, &mut app).await,
                UiMode::Inline => run_app_inline(&mut session.terminal, &mut app).await,
            }
        };

        match run_result {
            Ok(RunResult::SwitchMode) => {
                ui_mode = ui_mode.toggle();
                tracing::info!(?ui_mode, "switching screen mode");
            }
            Ok(RunResult::Quit) => break,
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }

    app.unmount();
    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(16);

async fn run_app_full<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<RunResult>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    run_frames(terminal, app, draw).await
}

async fn run_app_inline<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<RunResult>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    run_frames(terminal, app, draw_inline).await
}

async fn run_frames<B>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    render: fn(&mut Frame, &App),
) -> Result<RunResult>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut viewport = Rect::default();

    let result: Result<RunResult> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let quit_now = match handle_events(app, &mut input, viewport) {
            Ok(q) => q,
            Err(e) => break Err(e),
        };
        if quit_now {
            break Ok(RunResult::Quit);
        }

        app.tick();

        match terminal.draw(|frame| render(frame, app)) {
            Ok(completed) => viewport = completed.area,
            Err(e) => break Err(e.into()),
        }

        if app.take_toggle_screen_mode() {
            break Ok(RunResult::SwitchMode);
        }
    };

    input.shutdown().await;
    result
}

#[cfg(test)]
mod tests {
    use super::UiMode;

    #[test]
    fn ui_mode_parses_known_values() {
        assert_eq!(UiMode::parse("inline"), Some(UiMode::Inline));
        assert_eq!(UiMode::parse(" Full "), Some(UiMode::Full));
        assert_eq!(UiMode::parse("fullscreen"), Some(UiMode::Full));
        assert_eq!(UiMode::parse("tiny"), None);
    }

    #[test]
    fn ui_mode_toggles() {
        assert_eq!(UiMode::Full.toggle(), UiMode::Inline);
        assert_eq!(UiMode::Inline.toggle(), UiMode::Full);
    }
}

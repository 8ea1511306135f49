//! Input handling for Folio TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use folio_engine::{App, SectionId};

use crate::nav::{NavHit, NavLayout};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if the caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input into the app.
///
/// `viewport` is the area of the last drawn frame, used to resolve mouse
/// clicks against the navigation bar. Returns `true` when the user asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump, viewport: Rect) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev, viewport) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(false)
}

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Select(SectionId),
    NextSection,
    PrevSection,
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    MenuConfirm,
    Remount,
    ToggleScreenMode,
}

/// Map a key press to a command. Menu keys only apply while the menu is open.
#[must_use]
pub fn map_key(key: KeyEvent, menu_open: bool) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    if menu_open {
        match key.code {
            KeyCode::Up => return Some(Command::MenuUp),
            KeyCode::Down => return Some(Command::MenuDown),
            KeyCode::Enter => return Some(Command::MenuConfirm),
            KeyCode::Esc => return Some(Command::CloseMenu),
            _ => {}
        }
    }

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Command::Select(SectionId::from_index(index)?)
        }
        KeyCode::Char('h') => Command::Select(SectionId::Home),
        KeyCode::Char('a') => Command::Select(SectionId::About),
        KeyCode::Char('s') => Command::Select(SectionId::Skills),
        KeyCode::Char('p' | 'w') => Command::Select(SectionId::Projects),
        KeyCode::Char('c' | 'g') => Command::Select(SectionId::Contact),
        KeyCode::Tab | KeyCode::Right => Command::NextSection,
        KeyCode::BackTab | KeyCode::Left => Command::PrevSection,
        KeyCode::Char('m') => Command::ToggleMenu,
        KeyCode::Char('r') => Command::Remount,
        KeyCode::F(2) => Command::ToggleScreenMode,
        _ => return None,
    };
    Some(command)
}

/// Apply a command. Returns `true` on quit.
pub fn apply_command(app: &mut App, command: Command) -> bool {
    match command {
        Command::Quit => return true,
        Command::Select(section) => {
            app.select(section);
        }
        Command::NextSection => {
            app.next_section();
        }
        Command::PrevSection => {
            app.prev_section();
        }
        Command::ToggleMenu => {
            app.toggle_menu();
        }
        Command::CloseMenu => {
            app.close_menu();
        }
        Command::MenuUp => app.move_menu_cursor(false),
        Command::MenuDown => app.move_menu_cursor(true),
        Command::MenuConfirm => {
            app.select_menu_cursor();
        }
        Command::Remount => {
            if let Err(err) = app.remount() {
                warn!(%err, "remount failed, landing view left unmounted");
            }
        }
        Command::ToggleScreenMode => app.request_toggle_screen_mode(),
    }
    false
}

fn apply_event(app: &mut App, event: Event, viewport: Rect) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return false;
            }
            match map_key(key, app.menu_open()) {
                Some(command) => {
                    debug!(?command, "key command");
                    apply_command(app, command)
                }
                None => false,
            }
        }
        Event::Mouse(mouse) => {
            apply_mouse(app, mouse, viewport);
            false
        }
        _ => false,
    }
}

/// Resolve a left click against the navigation bar.
pub fn apply_mouse(app: &mut App, mouse: MouseEvent, viewport: Rect) {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let layout = NavLayout::compute(viewport, app.ui_options(), app.menu_open());
    match layout.hit(mouse.column, mouse.row) {
        Some(NavHit::Tab(section) | NavHit::MenuItem(section)) => {
            app.select(section);
        }
        Some(NavHit::MenuButton) => {
            app.toggle_menu();
        }
        None => {
            // Clicking away dismisses the dropdown.
            app.close_menu();
        }
    }
}

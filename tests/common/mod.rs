//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

mod vt100_backend;

use std::time::Duration;

use ratatui::{Frame, Terminal};

use folio_engine::{App, TypewriterSettings, UiOptions};

pub use vt100_backend::VT100Backend;

/// App over the built-in profile and default timings.
pub fn portfolio_app(options: UiOptions) -> App {
    App::new(
        TypewriterSettings::default(),
        folio_config::default_profile().clone(),
        options,
    )
    .expect("default settings are valid")
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Draw one frame on a fresh virtual terminal and return it.
pub fn render<F>(width: u16, height: u16, draw: F) -> Terminal<VT100Backend>
where
    F: FnOnce(&mut Frame),
{
    let backend = VT100Backend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(draw).expect("failed to draw");
    terminal
}

//! Application root: owns the terminal, the tokio runtime and the root
//! screen, and drives the UI loop on the main thread.

mod footer;
mod header;
mod render;

use crate::config::Config;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::navigation::Navigator;
use crate::ui::terminal_guard::setup_terminal;
use crate::weather::WeatherModule;
use anyhow::Context;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub use render::{draw, FEATURE_NAME};

/// Upper bound on how long interactor callbacks wait before being applied.
const CALLBACK_POLL: Duration = Duration::from_millis(20);

pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("weather-worker")
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    let navigator = Navigator::new();
    let mut screen = WeatherModule::build(runtime.handle(), navigator.clone(), &config.weather);

    let dirty = Rc::new(Cell::new(true));
    let redraw = Rc::clone(&dirty);
    screen.observe(move |_| redraw.set(true));

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events =
        EventHandler::new(config.ui.tick_rate()).context("failed to start input thread")?;

    tracing::info!("weather screen mounted");
    screen.appear();

    loop {
        screen.process_callbacks();
        if dirty.replace(false) {
            terminal
                .draw(|frame| draw(frame, &screen))
                .context("failed to draw frame")?;
        }
        if navigator.is_empty() {
            break;
        }

        match events.next(CALLBACK_POLL) {
            Ok(AppEvent::Key(key)) => {
                if is_interrupt(key) {
                    break;
                }
                screen.handle_key(key);
            }
            Ok(AppEvent::Tick) => {
                if screen.is_loading() {
                    screen.on_tick();
                    dirty.set(true);
                }
            }
            Ok(AppEvent::Resize(..)) => dirty.set(true),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    screen.disappear();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("weather screen closed");
    Ok(())
}

fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

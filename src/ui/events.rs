use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and merges it with ticks.
///
/// The reader thread exits on its own once the handler is dropped.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Start the input thread. Fails if the thread cannot be spawned.
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    // Short poll so a dropped receiver is noticed quickly
                    let timeout = tick_rate
                        .saturating_sub(last_tick.elapsed())
                        .min(Duration::from_millis(50));

                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                    Some(AppEvent::Key(key))
                                }
                                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                                Ok(_) => None,
                                Err(err) => {
                                    tracing::error!(%err, "terminal read failed");
                                    break;
                                }
                            };
                            if let Some(event) = forwarded {
                                if tx.send(event).is_err() {
                                    break;
                                }
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(%err, "terminal poll failed");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })?;

        Ok(Self { rx })
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

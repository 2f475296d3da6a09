//! Background input thread.
//!
//! Terminal reads block, so they run on their own thread and are forwarded
//! over a channel. The main loop drains the channel once per frame without
//! blocking.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};

use crate::map::map_event;
use crate::types::{LifeAction, INPUT_POLL_MS};

/// Where raw events come from.
pub trait EventSource: Send + 'static {
    /// Wait up to `timeout` for an event to become readable.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process terminal, via crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermSource;

impl EventSource for CrosstermSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Input thread handle.
///
/// Dropping the pump raises the stop flag and joins the thread; the thread
/// notices within one poll timeout.
#[derive(Debug)]
pub struct EventPump {
    rx: Receiver<Event>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    disconnected: bool,
}

impl EventPump {
    /// Start reading from the real terminal.
    pub fn spawn() -> io::Result<Self> {
        Self::spawn_with(CrosstermSource, Duration::from_millis(INPUT_POLL_MS))
    }

    pub fn spawn_with<S: EventSource>(mut source: S, poll_timeout: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel::<Event>();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("tui-life-input".to_string())
            .spawn(move || {
                while !thread_stop.load(Ordering::Relaxed) {
                    match source.poll(poll_timeout) {
                        Ok(false) => {}
                        Ok(true) => match source.read() {
                            Ok(event) => {
                                if tx.send(event).is_err() {
                                    // Receiver is gone.
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::error!("input thread: read failed: {}", e);
                                break;
                            }
                        },
                        Err(e) => {
                            tracing::error!("input thread: poll failed: {}", e);
                            break;
                        }
                    }
                }
                tracing::debug!("input thread exiting");
            })?;

        Ok(Self {
            rx,
            stop,
            handle: Some(handle),
            disconnected: false,
        })
    }

    /// Drain all pending events (non-blocking) and map them to actions.
    ///
    /// If the input thread has died, a single `Quit` is reported since the
    /// operator can no longer reach the quit key.
    pub fn poll_actions(&mut self) -> Vec<LifeAction> {
        let mut actions = Vec::new();

        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    if let Some(action) = map_event(&event) {
                        actions.push(action);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.disconnected {
                        self.disconnected = true;
                        tracing::warn!("input thread disconnected; quitting");
                        actions.push(LifeAction::Quit);
                    }
                    break;
                }
            }
        }

        actions
    }
}

impl Drop for EventPump {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::LifeAction`] and runs the
//! background thread that reads them, so the main loop never blocks on input.

pub mod map;
pub mod pump;

pub use tui_life_types as types;

pub use map::{handle_key_event, map_event, should_quit};
pub use pump::{CrosstermSource, EventPump, EventSource};

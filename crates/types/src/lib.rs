//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, input mapping, terminal rendering).
//!
//! # Colors
//!
//! A [`Color`] is an opaque 64-bit value. The simulation never interprets it;
//! it only sums and averages raw magnitudes when a cell is born. The terminal
//! layer decides how a color is shown (see `tui-life-term`).
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 33 | Default frame interval (~30 FPS) |
//! | `INPUT_POLL_MS` | 100 | Input thread poll timeout |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::Color;
//!
//! assert_eq!(Color::DEFAULT, Color(0));
//! assert_eq!(Color(0x00FF00).raw(), 0x00FF00);
//! ```

/// Default frame interval in milliseconds (33ms ≈ 30 FPS)
pub const FRAME_MS: u64 = 33;

/// How long the input thread waits for an event before re-checking its stop flag
pub const INPUT_POLL_MS: u64 = 100;

/// Glyph drawn for a live cell
pub const LIVE_GLYPH: char = '█';

/// Glyph drawn for a dead cell
pub const DEAD_GLYPH: char = ' ';

/// Opaque 64-bit cell color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Color(pub u64);

impl Color {
    /// Fixed "no color" value, returned as the average of zero neighbors.
    ///
    /// Never assigned to a cell by the birth rule, since births need three
    /// live neighbors.
    pub const DEFAULT: Color = Color(0);

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Commands the running session understands.
///
/// Produced by the input layer from terminal events; consumed by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    /// Leave the main loop and restore the terminal
    Quit,
    /// Re-randomize the board in place
    Reseed,
    /// The terminal was resized to (width, height)
    Resize(u16, u16),
}

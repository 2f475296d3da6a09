//! Terminal rendering module.
//!
//! A small rendering layer for the simulation. The grid draws itself into a
//! [`FrameBuffer`] (which implements [`core::RenderSink`]), and the
//! [`TerminalRenderer`] flushes only what changed since the last frame.
//!
//! Goals:
//! - Keep `core` free of terminal types
//! - Never leave the operator's terminal in raw mode, even on panic

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use renderer::{
    encode_diff_into, encode_full_into, install_panic_hook, restore_terminal, TerminalRenderer,
};
pub use view::{LifeView, Viewport};

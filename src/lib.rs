//! TUI Life (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_life::{core,input,term,types}` and
//! hosts the pieces only the binary needs: environment configuration and
//! log setup.

pub mod config;
pub mod logging;

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;

//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the Game of Life engine. It has **no dependencies** on
//! terminals, threads or I/O; the only outside input is the random source,
//! which callers pass in.
//!
//! # Module Structure
//!
//! - [`cell`]: a live cell and its color
//! - [`grid`]: toroidal board, neighbor averaging, generation advance
//! - [`life`]: running session (generation counter, reseed, quit)
//! - [`sink`]: the drawing seam implemented by the terminal layer
//!
//! # Rules
//!
//! Classic B3/S23 on a wrap-around board, plus a color policy:
//!
//! - **Birth**: a dead slot with exactly 3 live neighbors gets a new cell whose
//!   color is the truncated mean of those neighbors' colors
//! - **Survival**: a live cell with 2 or 3 neighbors is carried over as-is
//! - **Death**: everything else
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tui_life_core::{Cell, Grid};
//! use tui_life_types::Color;
//!
//! // A blinker
//! let mut grid = Grid::new(5, 5);
//! for c in 0..3 {
//!     grid.set(1, c, Some(Cell::new(Color(1))));
//! }
//!
//! let next = grid.next();
//! assert!(next.get(0, 1).is_some());
//! assert!(next.get(1, 0).is_none());
//!
//! let mut seeded = Grid::new(8, 8);
//! seeded.randomize(&mut StdRng::seed_from_u64(1));
//! ```

pub mod cell;
pub mod grid;
pub mod life;
pub mod sink;

pub use tui_life_types as types;

pub use cell::Cell;
pub use grid::{Grid, Slot};
pub use life::Life;
pub use sink::{RenderSink, Style};

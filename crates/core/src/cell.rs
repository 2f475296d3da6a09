//! Cell module - one unit of live state
//!
//! A cell only carries a color. Dead slots hold no cell at all, so there is no
//! "dead cell" value. Cells are never mutated after creation: a generation
//! either copies a cell forward unchanged or creates a fresh one.

use rand::Rng;

use crate::types::Color;

/// A live cell and the color it is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    color: Color,
}

impl Cell {
    /// Create a cell with a known color (births, patterns, tests)
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Create a cell with a color drawn uniformly from the full 64-bit range
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Color(rng.gen::<u64>()))
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

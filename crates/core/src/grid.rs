//! Grid module - the toroidal Game of Life board
//!
//! The grid is a `rows x cols` array of slots, each either holding a live
//! [`Cell`] or nothing. Storage is a flat row-major `Vec` (`row * cols + col`).
//!
//! There is no edge: every lookup wraps both axes with Euclidean remainder, so
//! any signed coordinate is valid. A grid with a zero dimension is empty and
//! every operation on it is a no-op.
//!
//! A grid is one generation. [`Grid::next`] never touches `self`; it builds a
//! new grid from the old one only. [`Grid::randomize`] is the only in-place
//! bulk mutation and is meant for seeding.

use rand::Rng;

use crate::cell::Cell;
use crate::sink::{RenderSink, Style};
use crate::types::{Color, DEAD_GLYPH, LIVE_GLYPH};

/// One grid slot: `Some` is alive, `None` is dead
pub type Slot = Option<Cell>;

/// Moore neighborhood offsets, excluding the center
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    slots: Vec<Slot>,
}

impl Grid {
    /// Create a grid with every slot dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: vec![None; rows * cols],
        }
    }

    /// `(rows, cols)`, fixed for the lifetime of the grid
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Map any signed coordinate onto a slot index
    #[inline(always)]
    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let r = x.rem_euclid(self.rows as isize) as usize;
        let c = y.rem_euclid(self.cols as isize) as usize;
        Some(r * self.cols + c)
    }

    /// Cell at `(x, y)` after wrapping, or `None` if that slot is dead
    pub fn get(&self, x: isize, y: isize) -> Option<&Cell> {
        self.index(x, y).and_then(|i| self.slots[i].as_ref())
    }

    /// Overwrite the slot at `(x, y)` after wrapping
    ///
    /// Used to place patterns. Does nothing on an empty grid.
    pub fn set(&mut self, x: isize, y: isize, slot: Slot) {
        if let Some(i) = self.index(x, y) {
            self.slots[i] = slot;
        }
    }

    /// Count live Moore neighbors of `(x, y)` and average their colors
    ///
    /// The average is the truncated mean of the raw color values, or
    /// [`Color::DEFAULT`] when there are no live neighbors. On grids smaller
    /// than 3 in an axis the same slot can be visited more than once and is
    /// counted each time.
    pub fn neighbors(&self, x: isize, y: isize) -> (u8, Color) {
        if self.is_empty() {
            return (0, Color::DEFAULT);
        }

        // Normalize first so the offsets below cannot overflow.
        let x = x.rem_euclid(self.rows as isize);
        let y = y.rem_euclid(self.cols as isize);

        let mut count = 0u8;
        let mut sum: u128 = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            if let Some(cell) = self.get(x + dx, y + dy) {
                count += 1;
                sum += u128::from(cell.color().raw());
            }
        }

        if count == 0 {
            return (0, Color::DEFAULT);
        }
        // The mean of u64 values always fits back into a u64.
        (count, Color((sum / u128::from(count)) as u64))
    }

    /// Compute the next generation (B3/S23)
    ///
    /// - dead with exactly 3 neighbors: born with the neighbors' average color
    /// - alive with 2 or 3 neighbors: the same cell carries over
    /// - anything else: dead
    pub fn next(&self) -> Grid {
        let mut next = Grid::new(self.rows, self.cols);

        for r in 0..self.rows {
            for c in 0..self.cols {
                let i = r * self.cols + c;
                let (count, avg) = self.neighbors(r as isize, c as isize);
                next.slots[i] = match (self.slots[i], count) {
                    (None, 3) => Some(Cell::new(avg)),
                    (Some(cell), 2 | 3) => Some(cell),
                    _ => None,
                };
            }
        }

        next
    }

    /// Reseed in place: every slot independently alive with probability 1/2
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for slot in &mut self.slots {
            *slot = if rng.gen_bool(0.5) {
                Some(Cell::random(rng))
            } else {
                None
            };
        }
    }

    /// Emit exactly one `set_content` per slot
    ///
    /// Live slots render as a block in the cell's color, dead slots as a blank
    /// with the default style. Slot `(r, c)` goes to sink position `(r, c)`.
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for (r, c, slot) in self.iter() {
            match slot {
                Some(cell) => sink.set_content(r, c, LIVE_GLYPH, Style::Fg(cell.color())),
                None => sink.set_content(r, c, DEAD_GLYPH, Style::Default),
            }
        }
    }

    /// Number of live slots
    pub fn population(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate `(row, col, slot)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<&Cell>)> + '_ {
        let cols = self.cols;
        self.slots
            .iter()
            .enumerate()
            .map(move |(i, slot)| (i / cols, i % cols, slot.as_ref()))
    }
}

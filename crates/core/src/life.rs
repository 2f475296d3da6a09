//! Life session - the running simulation the shell drives
//!
//! Owns the current generation, the generation counter and the random source
//! used for reseeding. The shell calls [`Life::apply_action`] for each input
//! command and [`Life::step`] once per frame.

use rand::Rng;

use crate::grid::Grid;
use crate::types::LifeAction;

#[derive(Debug, Clone)]
pub struct Life<R> {
    grid: Grid,
    generation: u64,
    finished: bool,
    rng: R,
}

impl<R: Rng> Life<R> {
    /// Create a `rows x cols` session and seed it randomly
    pub fn new(rows: usize, cols: usize, mut rng: R) -> Self {
        let mut grid = Grid::new(rows, cols);
        grid.randomize(&mut rng);
        Self::with_grid(grid, rng)
    }

    /// Start from an existing board (patterns, tests)
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            generation: 0,
            finished: false,
            rng,
        }
    }

    /// Apply an input command.
    ///
    /// Resizes leave the board alone; the grid keeps its startup size and
    /// only the renderer reacts.
    pub fn apply_action(&mut self, action: LifeAction) {
        match action {
            LifeAction::Quit => self.finished = true,
            LifeAction::Reseed => {
                self.grid.randomize(&mut self.rng);
                self.generation = 0;
            }
            LifeAction::Resize(..) => {}
        }
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.grid = self.grid.next();
        self.generation += 1;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

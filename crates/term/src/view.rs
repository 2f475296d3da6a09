//! LifeView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::FrameBuffer;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Grid size that fills this viewport: one row per terminal column.
    pub fn grid_size(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LifeView;

impl LifeView {
    /// Render a generation into an existing framebuffer.
    ///
    /// The framebuffer is resized to the viewport and blanked first, so
    /// terminal area the grid does not cover stays empty after a resize.
    pub fn render_into(&self, grid: &Grid, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();
        grid.draw(fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, viewport, &mut fb);
        fb
    }
}

//! Render sink seam between the grid and whatever draws it.

use crate::types::Color;

/// How a glyph should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// The surface's default foreground/background
    #[default]
    Default,
    /// Foreground in the given cell color
    Fg(Color),
}

/// Anything a [`Grid`](crate::Grid) can be drawn onto.
///
/// `x` is the grid row and `y` the grid column, so rows run along the
/// terminal width.
pub trait RenderSink {
    fn set_content(&mut self, x: usize, y: usize, glyph: char, style: Style);
}

//! Framebuffer and style types for terminal rendering.

use crate::core::{RenderSink, Style};
use crate::types::{Color, DEAD_GLYPH};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Terminal rendition of a cell color: its low 24 bits as `0xRRGGBB`.
    pub const fn from_color(color: Color) -> Self {
        let raw = color.0;
        Self {
            r: (raw >> 16) as u8,
            g: (raw >> 8) as u8,
            b: raw as u8,
        }
    }
}

/// Per-cell styling. `fg: None` leaves the terminal's own foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Rgb>,
}

impl From<Style> for CellStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Default => CellStyle { fg: None },
            Style::Fg(color) => CellStyle {
                fg: Some(Rgb::from_color(color)),
            },
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: DEAD_GLYPH,
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Glyph::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Glyph::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Glyph::default());
    }
}

impl RenderSink for FrameBuffer {
    fn set_content(&mut self, x: usize, y: usize, glyph: char, style: Style) {
        // A grid larger than a shrunk terminal just gets clipped.
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        self.set(
            x,
            y,
            Glyph {
                ch: glyph,
                style: style.into(),
            },
        );
    }
}

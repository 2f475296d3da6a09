use tui_life::core::{Cell, Grid};
use tui_life::term::{FrameBuffer, Glyph, LifeView, Rgb, TerminalRenderer, Viewport};
use tui_life::types::{Color, LIVE_GLYPH};

#[test]
fn term_view_maps_rows_to_columns() {
    // 4 rows x 2 cols fills a 4-wide, 2-tall terminal.
    let mut grid = Grid::new(4, 2);
    grid.set(3, 1, Some(Cell::new(Color(0x112233))));

    let fb = LifeView.render(&grid, Viewport::new(4, 2));

    let g = fb.get(3, 1).unwrap();
    assert_eq!(g.ch, LIVE_GLYPH);
    assert_eq!(g.style.fg, Some(Rgb::new(0x11, 0x22, 0x33)));
    assert_eq!(fb.get(1, 3), None);
}

#[test]
fn term_view_blanks_dead_cells() {
    let grid = Grid::new(3, 3);
    let fb = LifeView.render(&grid, Viewport::new(3, 3));
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(fb.get(x, y), Some(Glyph::default()));
        }
    }
}

#[test]
fn term_view_clears_area_outside_grid() {
    let mut grid = Grid::new(2, 2);
    grid.set(0, 0, Some(Cell::new(Color(1))));

    let mut fb = FrameBuffer::new(5, 5);
    let mut full = Grid::new(5, 5);
    for x in 0..5 {
        for y in 0..5 {
            full.set(x, y, Some(Cell::new(Color(9))));
        }
    }
    LifeView.render_into(&full, Viewport::new(5, 5), &mut fb);
    LifeView.render_into(&grid, Viewport::new(5, 5), &mut fb);

    assert_eq!(fb.get(0, 0).unwrap().ch, LIVE_GLYPH);
    assert_eq!(fb.get(4, 4), Some(Glyph::default()));
    assert_eq!(fb.get(1, 0), Some(Glyph::default()));
}

#[test]
fn term_view_clips_grid_to_smaller_viewport() {
    let mut grid = Grid::new(10, 10);
    grid.set(9, 9, Some(Cell::new(Color(1))));
    grid.set(1, 1, Some(Cell::new(Color(1))));

    let fb = LifeView.render(&grid, Viewport::new(4, 4));
    assert_eq!(fb.width(), 4);
    assert_eq!(fb.get(1, 1).unwrap().ch, LIVE_GLYPH);
}

#[test]
fn viewport_sizes_grid_from_terminal() {
    assert_eq!(Viewport::new(80, 24).grid_size(), (80, 24));
}

#[test]
fn renderer_redraws_everything_after_resize() {
    let mut grid = Grid::new(3, 2);
    grid.set(0, 0, Some(Cell::new(Color(0x010203))));
    grid.set(2, 1, Some(Cell::new(Color(0x010203))));

    let mut term = TerminalRenderer::with_writer(Vec::new());
    let mut fb = FrameBuffer::new(3, 2);

    LifeView.render_into(&grid, Viewport::new(3, 2), &mut fb);
    term.draw_swap(&mut fb).unwrap();
    assert_eq!(String::from_utf8_lossy(term.get_ref()).matches(LIVE_GLYPH).count(), 2);

    // A larger terminal changes the frame size, so both cells are sent again.
    term.get_mut().clear();
    LifeView.render_into(&grid, Viewport::new(5, 4), &mut fb);
    term.draw_swap(&mut fb).unwrap();
    let text = String::from_utf8_lossy(term.get_ref()).into_owned();
    assert!(text.contains("\x1b[2J"));
    assert_eq!(text.matches(LIVE_GLYPH).count(), 2);
}

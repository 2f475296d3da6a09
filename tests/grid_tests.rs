//! Grid tests - rules, wrapping and color propagation

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_life::core::{Cell, Grid};
use tui_life::types::Color;

fn place(grid: &mut Grid, cells: &[(isize, isize)], color: u64) {
    for &(r, c) in cells {
        grid.set(r, c, Some(Cell::new(Color(color))));
    }
}

fn live_cells(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, _, slot)| slot.is_some())
        .map(|(r, c, _)| (r, c))
        .collect()
}

#[test]
fn test_wrap_is_periodic() {
    let mut grid = Grid::new(4, 7);
    grid.randomize(&mut StdRng::seed_from_u64(99));
    let (rows, cols) = (4isize, 7isize);

    for x in -9..9 {
        for y in -15..15 {
            for (k, j) in [(1, 0), (0, 1), (-2, 3), (5, -4)] {
                assert_eq!(
                    grid.get(x, y),
                    grid.get(x + k * rows, y + j * cols),
                    "({}, {}) vs shifted by ({}, {})",
                    x,
                    y,
                    k,
                    j
                );
            }
        }
    }
}

#[test]
fn test_neighbor_count_bounds() {
    let mut rng = StdRng::seed_from_u64(5);
    for (rows, cols) in [(1, 1), (2, 3), (8, 8), (13, 5)] {
        let mut grid = Grid::new(rows, cols);
        grid.randomize(&mut rng);
        for r in 0..rows as isize {
            for c in 0..cols as isize {
                let (count, _) = grid.neighbors(r, c);
                assert!(count <= 8);
            }
        }
    }
}

#[test]
fn test_zero_neighbors_gives_sentinel() {
    let mut grid = Grid::new(10, 10);
    place(&mut grid, &[(0, 0)], 1234);
    assert_eq!(grid.neighbors(5, 5), (0, Color::DEFAULT));
}

#[test]
fn test_birth_color_is_floor_of_mean() {
    let colors = [
        [1u64, 2, 4],
        [u64::MAX, u64::MAX - 1, 7],
        [0xFF0000, 0x00FF00, 0x0000FF],
    ];
    for [c1, c2, c3] in colors {
        let mut grid = Grid::new(8, 8);
        place(&mut grid, &[(3, 3)], c1);
        place(&mut grid, &[(3, 5)], c2);
        place(&mut grid, &[(5, 4)], c3);

        // (4, 4) is dead with exactly those three neighbors.
        let expected = ((c1 as u128 + c2 as u128 + c3 as u128) / 3) as u64;
        let next = grid.next();
        assert_eq!(next.get(4, 4).map(|c| c.color()), Some(Color(expected)));
    }
}

#[test]
fn test_survivors_keep_their_color() {
    let mut grid = Grid::new(8, 8);
    // Each corner of the block gets its own color.
    place(&mut grid, &[(2, 2)], 10);
    place(&mut grid, &[(2, 3)], 20);
    place(&mut grid, &[(3, 2)], 30);
    place(&mut grid, &[(3, 3)], 40);

    let next = grid.next();
    for (r, c) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
        assert_eq!(next.get(r, c), grid.get(r, c));
    }
}

#[test]
fn test_death_by_isolation_and_crowding() {
    let mut grid = Grid::new(9, 9);
    // Lonely cell.
    place(&mut grid, &[(1, 1)], 1);
    // Plus-shape: the center has 4 neighbors.
    place(&mut grid, &[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)], 2);

    let next = grid.next();
    assert!(next.get(1, 1).is_none());
    assert!(next.get(5, 5).is_none());
}

#[test]
fn test_dead_without_three_stays_dead() {
    let mut grid = Grid::new(9, 9);
    place(&mut grid, &[(3, 3), (3, 5)], 1);
    place(&mut grid, &[(6, 2), (6, 3), (6, 4), (7, 2)], 1);

    let next = grid.next();
    // Two neighbors.
    assert!(next.get(4, 4).is_none());
    // Four neighbors.
    assert!(next.get(7, 3).is_none());
}

#[test]
fn test_next_is_pure() {
    let mut grid = Grid::new(20, 15);
    grid.randomize(&mut StdRng::seed_from_u64(2024));
    let snapshot = grid.clone();

    let first = grid.next();
    let second = grid.next();

    assert_eq!(grid, snapshot);
    assert_eq!(first, second);
    assert_eq!(first.size(), grid.size());
}

#[test]
fn test_block_is_still_life() {
    let mut grid = Grid::new(10, 10);
    place(&mut grid, &[(4, 4), (4, 5), (5, 4), (5, 5)], 77);

    let mut current = grid.clone();
    for _ in 0..10 {
        current = current.next();
        assert_eq!(current, grid);
    }
}

#[test]
fn test_blinker_oscillates() {
    let mut grid = Grid::new(5, 5);
    place(&mut grid, &[(1, 0), (1, 1), (1, 2)], 3);

    let vertical = grid.next();
    assert_eq!(live_cells(&vertical), vec![(0, 1), (1, 1), (2, 1)]);

    let horizontal = vertical.next();
    assert_eq!(live_cells(&horizontal), vec![(1, 0), (1, 1), (1, 2)]);
}

#[test]
fn test_glider_crosses_the_seam() {
    let mut grid = Grid::new(8, 8);
    place(&mut grid, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)], 1);

    // A glider returns to its shape shifted by (1, 1) every 4 generations; 32
    // generations moves it 8 cells, once around the torus.
    let mut current = grid.clone();
    for _ in 0..32 {
        current = current.next();
    }
    assert_eq!(live_cells(&current), live_cells(&grid));
    assert_eq!(current.population(), 5);
}

#[test]
fn test_randomize_is_non_degenerate() {
    let mut rng = StdRng::seed_from_u64(31337);
    let mut grid = Grid::new(40, 40);

    for _ in 0..20 {
        grid.randomize(&mut rng);
        let live = grid.population();
        assert!(live > 0, "no live cells");
        assert!(live < 40 * 40, "no dead cells");
        // 1600 fair coin flips: far outside these bounds is broken.
        assert!((600..=1000).contains(&live), "population {}", live);
    }
}

#[test]
fn test_randomize_replaces_previous_state() {
    let mut grid = Grid::new(30, 30);
    place(&mut grid, &[(0, 0)], 5);
    let mut rng = StdRng::seed_from_u64(1);
    grid.randomize(&mut rng);
    let first = grid.clone();
    grid.randomize(&mut rng);
    assert_ne!(first, grid);
    assert_eq!(grid.size(), (30, 30));
}

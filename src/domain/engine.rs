use super::Grid;
use super::rules::live_neighbors;
use crate::error::Result;

/// Advance one generation.
///
/// Every cell of the new grid is computed from `grid` alone, which is only
/// borrowed. On failure the caller still holds the previous generation.
pub fn step(grid: &Grid) -> Result<Grid> {
    let (rows, cols) = grid.dimensions();
    Grid::from_fn(rows, cols, |row, col| {
        let current = grid.cell(row, col).unwrap_or_default();
        current.evolve(live_neighbors(grid, row, col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let grid = Grid::new(8, 12).unwrap();
        let next = step(&grid).unwrap();
        assert_eq!(next, grid);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(6, 6).unwrap();
        presets::block().place_on(&mut grid, 2, 2).unwrap();
        assert_eq!(step(&grid).unwrap(), grid);
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        let mut grid = Grid::new(4, 4).unwrap();
        presets::block().place_on(&mut grid, 0, 0).unwrap();
        assert_eq!(step(&grid).unwrap(), grid);
    }

    #[test]
    fn test_beehive_is_still_life() {
        let mut grid = Grid::new(7, 8).unwrap();
        presets::beehive().place_on(&mut grid, 2, 2).unwrap();
        assert_eq!(step(&grid).unwrap(), grid);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = Grid::new(5, 5).unwrap();
        for col in 1..=3 {
            grid.set(2, col, true).unwrap();
        }

        let once = step(&grid).unwrap();
        assert_eq!(alive_cells(&once), vec![(1, 2), (2, 2), (3, 2)]);

        let twice = step(&once).unwrap();
        assert_eq!(twice, grid);
    }

    #[test]
    fn test_toad_has_period_two() {
        let mut grid = Grid::new(6, 6).unwrap();
        presets::toad().place_on(&mut grid, 1, 1).unwrap();
        let once = step(&grid).unwrap();
        assert_ne!(once, grid);
        assert_eq!(step(&once).unwrap(), grid);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut start = Grid::new(10, 10).unwrap();
        presets::glider().place_on(&mut start, 1, 1).unwrap();
        let mut expected = Grid::new(10, 10).unwrap();
        presets::glider().place_on(&mut expected, 2, 2).unwrap();

        let mut grid = start;
        for _ in 0..4 {
            grid = step(&grid).unwrap();
        }
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_single_cell_dies() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, true).unwrap();
        assert_eq!(step(&grid).unwrap().population(), 0);
    }

    #[test]
    fn test_edge_blinker_does_not_wrap() {
        // Vertical blinker on the left edge; a toroidal grid would spawn
        // a cell in the last column.
        let mut grid = Grid::new(5, 5).unwrap();
        for row in 1..=3 {
            grid.set(row, 0, true).unwrap();
        }
        let next = step(&grid).unwrap();
        assert_eq!(alive_cells(&next), vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn test_step_leaves_input_untouched_and_is_deterministic() {
        let mut grid = Grid::new(16, 16).unwrap();
        grid.seed_random_with(0.3, &mut StdRng::seed_from_u64(9)).unwrap();
        let snapshot = grid.clone();

        let a = step(&grid).unwrap();
        let b = step(&grid).unwrap();
        assert_eq!(grid, snapshot);
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), grid.dimensions());
    }
}

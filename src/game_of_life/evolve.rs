//! Generation stepping for life-like rules

use super::{Cell, Grid, Rule};
use log::trace;
use rayon::prelude::*;

/// Evolve the grid one generation forward under `rule`.
///
/// Every output cell is computed from the input grid only, so rows are
/// processed in parallel. Row count and each row's length are preserved.
pub fn evolve(current: &Grid, rule: &Rule) -> Grid {
    let rows: Vec<Vec<Cell>> = current
        .rows()
        .par_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, &cell)| rule.next_cell(cell, current.count_neighbors(row, col)))
                .collect()
        })
        .collect();

    Grid::from_rows(rows)
}

/// Evolve the grid for multiple generations.
///
/// A non-positive count returns the input grid unchanged.
pub fn evolve_generations(mut grid: Grid, rule: &Rule, generations: i64) -> Grid {
    for generation in 0..generations.max(0) {
        grid = evolve(&grid, rule);
        trace!("generation {}: {} living cells", generation + 1, grid.living_count());
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn cells_at(height: usize, width: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_still_life_block() {
        let grid = cells_at(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let rule = Rule::conway();

        assert_eq!(evolve(&grid, &rule), grid);
        assert_eq!(evolve_generations(grid.clone(), &rule, 25), grid);
    }

    #[test]
    fn test_oscillator_blinker() {
        let horizontal = cells_at(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = cells_at(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let rule = Rule::conway();

        let evolved = evolve(&horizontal, &rule);
        assert_eq!(evolved, vertical);
        assert_eq!(evolve(&evolved, &rule), horizontal);
        assert_eq!(evolve_generations(horizontal.clone(), &rule, 2), horizontal);
        assert_eq!(evolve_generations(horizontal.clone(), &rule, 7), vertical);
    }

    #[test]
    fn test_lone_cell_dies_without_survival() {
        let grid = cells_at(1, 1, &[(0, 0)]);
        let rule = Rule::new([], []);
        for generations in 1..5 {
            assert_eq!(
                evolve_generations(grid.clone(), &rule, generations).get(0, 0),
                Some(Cell::Dead)
            );
        }

        // Zero neighbors is a survival count here, so the cell stays
        let rule = Rule::new([], [0, 1, 2, 3]);
        assert_eq!(evolve(&grid, &rule).get(0, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_birth_from_nothing() {
        // B0 turns every dead cell with no living neighbors alive
        let grid = Grid::new(3, 3);
        let evolved = evolve(&grid, &Rule::new([0], []));
        assert_eq!(evolved.living_count(), 9);
    }

    #[test]
    fn test_non_positive_generations_are_identity() {
        let grid = cells_at(3, 3, &[(0, 0), (1, 1)]);
        let rule = Rule::conway();
        assert_eq!(evolve_generations(grid.clone(), &rule, 0), grid);
        assert_eq!(evolve_generations(grid.clone(), &rule, -4), grid);
    }

    #[test]
    fn test_ragged_grid_keeps_shape() {
        let grid = Grid::from_bools(vec![
            vec![false, true, false, false],
            vec![false, true],
            vec![false, true, false],
        ]);
        let evolved = evolve(&grid, &Rule::conway());
        assert!(evolved.same_shape(&grid));
        // Vertical line of three in column 1 flips to a horizontal line in row 1,
        // clipped to the two columns that row actually has
        assert_eq!(
            evolved,
            Grid::from_bools(vec![
                vec![false, false, false, false],
                vec![true, true],
                vec![false, false, false],
            ])
        );
    }

    #[test]
    fn test_large_generation_count_is_iterative() {
        let grid = cells_at(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(evolve_generations(grid.clone(), &Rule::conway(), 20_000), grid);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        prop::collection::vec(prop::collection::vec(any::<bool>(), 0..8), 0..8)
            .prop_map(Grid::from_bools)
    }

    fn arb_rule() -> impl Strategy<Value = Rule> {
        (
            prop::collection::btree_set(0u32..10, 0..6),
            prop::collection::btree_set(0u32..10, 0..6),
        )
            .prop_map(|(born, survive)| Rule::new(born, survive))
    }

    proptest! {
        #[test]
        fn test_shape_preserved(grid in arb_grid(), rule in arb_rule()) {
            let evolved = evolve(&grid, &rule);
            prop_assert!(evolved.same_shape(&grid));
        }

        #[test]
        fn test_deterministic(grid in arb_grid(), rule in arb_rule()) {
            prop_assert_eq!(evolve(&grid, &rule), evolve(&grid, &rule));
        }

        #[test]
        fn test_generations_compose(grid in arb_grid(), rule in arb_rule(), a in 0i64..5, b in 0i64..5) {
            let stepwise = evolve_generations(evolve_generations(grid.clone(), &rule, a), &rule, b);
            prop_assert_eq!(stepwise, evolve_generations(grid, &rule, a + b));
        }
    }
}

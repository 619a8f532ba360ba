//! Unit tests for seirs-grid.
//!
//! All tests use hand-placed agents so expected densities are exact.

#[cfg(test)]
mod counting {
    use seirs_core::{Cell, Compartment};

    use crate::DensityGrid;

    #[test]
    fn new_grid_is_clear() {
        let g = DensityGrid::new(4);
        assert_eq!(g.counts().len(), 16);
        assert!(g.is_clear());
        assert_eq!(g.total(), 0);
    }

    #[test]
    fn increment_decrement() {
        let mut g = DensityGrid::new(5);
        let c = Cell::new(2, 3);
        g.increment(c);
        g.increment(c);
        assert_eq!(g.get(c), 2);
        g.decrement(c);
        assert_eq!(g.get(c), 1);
        assert_eq!(g.total(), 1);
    }

    #[test]
    fn relocate_moves_one_count() {
        let mut g = DensityGrid::new(5);
        let a = Cell::new(0, 0);
        let b = Cell::new(4, 1);
        g.increment(a);
        g.relocate(a, b);
        assert_eq!(g.get(a), 0);
        assert_eq!(g.get(b), 1);
        assert_eq!(g.total(), 1);
    }

    #[test]
    fn relocate_same_cell_is_noop() {
        let mut g = DensityGrid::new(3);
        let a = Cell::new(1, 1);
        g.increment(a);
        g.relocate(a, a);
        assert_eq!(g.get(a), 1);
    }

    #[test]
    fn from_agents_counts_only_infectious() {
        use Compartment::*;
        let compartments = [Susceptible, Infectious, Exposed, Infectious, Removed];
        let positions = [
            Cell::new(0, 0),
            Cell::new(1, 1),
            Cell::new(1, 1),
            Cell::new(1, 1),
            Cell::new(2, 2),
        ];
        let g = DensityGrid::from_agents(3, &compartments, &positions);
        assert_eq!(g.get(Cell::new(1, 1)), 2);
        assert_eq!(g.total(), 2);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn decrement_empty_cell_panics_in_debug() {
        let mut g = DensityGrid::new(3);
        g.decrement(Cell::new(0, 0));
    }
}

#[cfg(test)]
mod neighbourhood {
    use seirs_core::Cell;

    use crate::DensityGrid;

    #[test]
    fn sum_includes_centre() {
        let mut g = DensityGrid::new(10);
        g.increment(Cell::new(5, 5));
        assert_eq!(g.moore_sum(Cell::new(5, 5)), 1);
    }

    #[test]
    fn sum_includes_all_eight_neighbours() {
        let mut g = DensityGrid::new(10);
        let centre = Cell::new(5, 5);
        for n in centre.moore_neighbours(10) {
            g.increment(n);
        }
        assert_eq!(g.moore_sum(centre), 8);
    }

    #[test]
    fn sum_ignores_distance_two() {
        let mut g = DensityGrid::new(10);
        g.increment(Cell::new(7, 5));
        assert_eq!(g.moore_sum(Cell::new(5, 5)), 0);
    }

    #[test]
    fn opposite_corners_see_each_other() {
        let side = 10;
        let mut g = DensityGrid::new(side);
        g.increment(Cell::new(side - 1, side - 1));
        assert_eq!(g.moore_sum(Cell::new(0, 0)), 1);

        let mut h = DensityGrid::new(side);
        h.increment(Cell::new(0, 0));
        assert_eq!(h.moore_sum(Cell::new(side - 1, side - 1)), 1);
    }

    #[test]
    fn edge_wraps_horizontally() {
        let mut g = DensityGrid::new(6);
        g.increment(Cell::new(0, 5));
        assert_eq!(g.moore_sum(Cell::new(0, 0)), 1);
        assert_eq!(g.moore_sum(Cell::new(5, 0)), 1);
    }

    #[test]
    fn single_cell_grid_counts_nine_times() {
        let mut g = DensityGrid::new(1);
        g.increment(Cell::new(0, 0));
        assert_eq!(g.moore_sum(Cell::new(0, 0)), 9);
    }

    #[test]
    fn crowded_cell_sum_does_not_wrap() {
        let mut g = DensityGrid::new(1);
        g.counts[0] = u32::MAX / 2;
        assert_eq!(g.moore_sum(Cell::new(0, 0)), 9 * u64::from(u32::MAX / 2));
    }
}

#[cfg(test)]
mod population {
    use seirs_agent::PopulationBuilder;
    use seirs_core::{Compartment, InitialCounts, SimRng};

    use crate::DensityGrid;

    #[test]
    fn total_matches_infectious_count() {
        let pop = PopulationBuilder::new(400, 8)
            .initial(InitialCounts::new(300, 20, 60, 20))
            .build(&mut SimRng::new(11))
            .unwrap();
        let g = DensityGrid::from_agents(8, &pop.compartment, &pop.position);
        assert_eq!(g.total(), pop.count_in(Compartment::Infectious) as u64);
        assert_eq!(g.total(), 60);
    }
}

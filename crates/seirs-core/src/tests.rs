//! Unit tests for seirs-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod cell {
    use crate::Cell;

    #[test]
    fn wrap_negative_offsets() {
        let c = Cell::new(0, 0);
        assert_eq!(c.wrap(-1, -1, 10), Cell::new(9, 9));
        assert_eq!(c.wrap(1, 0, 10), Cell::new(1, 0));
    }

    #[test]
    fn wrap_past_far_edge() {
        assert_eq!(Cell::new(9, 9).wrap(1, 1, 10), Cell::new(0, 0));
    }

    #[test]
    fn corners_are_mutual_neighbours() {
        let side = 10;
        let origin = Cell::new(0, 0);
        let corner = Cell::new(side - 1, side - 1);
        assert!(origin.moore_neighbours(side).contains(&corner));
        assert!(corner.moore_neighbours(side).contains(&origin));
    }

    #[test]
    fn interior_neighbourhood_excludes_self() {
        let c = Cell::new(5, 5);
        let n = c.moore_neighbours(10);
        assert!(!n.contains(&c));
        let mut unique = n.to_vec();
        unique.sort_by_key(|c| (c.x, c.y));
        unique.dedup();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn single_cell_grid_folds_onto_itself() {
        let c = Cell::new(0, 0);
        assert!(c.moore_neighbours(1).iter().all(|&n| n == c));
    }

    #[test]
    fn flat_index_is_row_major() {
        assert_eq!(Cell::new(2, 3).flat_index(10), 23);
    }
}

#[cfg(test)]
mod compartment {
    use crate::Compartment;

    #[test]
    fn cycle_returns_to_susceptible() {
        let mut c = Compartment::Susceptible;
        for _ in 0..4 {
            c = c.successor();
        }
        assert_eq!(c, Compartment::Susceptible);
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Compartment::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, ["S", "E", "I", "R"]);
    }
}

#[cfg(test)]
mod time {
    use crate::Day;

    #[test]
    fn day_next() {
        assert_eq!(Day::ZERO.next(), Day(1));
        assert_eq!(Day(4).index(), 4);
        assert_eq!(Day(3).to_string(), "D3");
    }
}

#[cfg(test)]
mod params {
    use crate::{CoreError, InitialCounts, SimParams};

    #[test]
    fn defaults_are_valid() {
        let p = SimParams::default();
        assert_eq!(p.grid_side, 300);
        assert_eq!(p.agent_count, 20_000);
        assert_eq!(p.days, 730);
        assert_eq!(p.initial, InitialCounts::new(19_980, 0, 20, 0));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn quota_mismatch_rejected() {
        let p = SimParams {
            agent_count: 100,
            initial: InitialCounts::new(80, 0, 10, 0),
            ..SimParams::default()
        };
        match p.validate() {
            Err(CoreError::InitialCountMismatch { expected, got }) => {
                assert_eq!(expected, 100);
                assert_eq!(got, 90);
            }
            other => panic!("expected InitialCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn zero_grid_rejected() {
        let p = SimParams { grid_side: 0, ..SimParams::default() };
        assert!(matches!(p.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_agents_rejected() {
        let p = SimParams {
            agent_count: 0,
            initial: InitialCounts::new(0, 0, 0, 0),
            ..SimParams::default()
        };
        assert!(matches!(p.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_days_allowed() {
        let p = SimParams { days: 0, ..SimParams::default() };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn negative_force_rejected() {
        let p = SimParams { infection_force: -0.1, ..SimParams::default() };
        assert!(p.validate().is_err());
    }

    #[test]
    fn nan_mean_rejected() {
        let mut p = SimParams::default();
        p.mean_duration.infectious = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn overflowing_quotas_rejected() {
        let p = SimParams {
            initial: InitialCounts::new(usize::MAX, 1, 0, 0),
            ..SimParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn with_seed_keeps_everything_else() {
        let p = SimParams::default();
        let q = p.with_seed(99);
        assert_eq!(q.seed, 99);
        assert_eq!(q.agent_count, p.agent_count);
        assert_eq!(q.initial, p.initial);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
            assert_eq!(r1.coord(300), r2.coord(300));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: Vec<f64> = { let mut r = SimRng::new(1); (0..4).map(|_| r.uniform()).collect() };
        let b: Vec<f64> = { let mut r = SimRng::new(2); (0..4).map(|_| r.uniform()).collect() };
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn coord_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.coord(7) < 7);
        }
        assert_eq!(rng.coord(1), 0);
    }

    #[test]
    fn neg_exp_non_negative_and_mean_close() {
        let mut rng = SimRng::new(3);
        let n = 20_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let d = rng.neg_exp(7.0);
            assert!(d >= 0.0 && d.is_finite());
            sum += d;
        }
        let mean = sum / n as f64;
        assert!((mean - 7.0).abs() < 0.3, "sample mean {mean}");
    }

    #[test]
    fn neg_exp_zero_mean_is_zero() {
        let mut rng = SimRng::new(3);
        assert_eq!(rng.neg_exp(0.0), 0.0);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut rng = SimRng::new(5);
        let mut v: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}

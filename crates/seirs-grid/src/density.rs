//! The `DensityGrid` — counts of infectious agents per cell.

use seirs_core::{Cell, Compartment};

/// Flat L×L array of infectious-agent counts, indexed by
/// [`Cell::flat_index`].
///
/// Exposed, Susceptible and Removed agents never contribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DensityGrid {
    side:   u32,
    pub(crate) counts: Vec<u32>,
}

impl DensityGrid {
    /// An all-zero grid of `side * side` cells.
    pub fn new(side: u32) -> Self {
        Self {
            side,
            counts: vec![0; side as usize * side as usize],
        }
    }

    /// Build the grid with one pass over the population's SoA arrays,
    /// counting every agent whose compartment is `Infectious`.
    pub fn from_agents(side: u32, compartments: &[Compartment], positions: &[Cell]) -> Self {
        let mut grid = Self::new(side);
        for (&c, &cell) in compartments.iter().zip(positions) {
            if c == Compartment::Infectious {
                grid.increment(cell);
            }
        }
        grid
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Read-only view of the raw counts (row-major).
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Count at one cell.
    #[inline]
    pub fn get(&self, cell: Cell) -> u32 {
        self.counts[cell.flat_index(self.side)]
    }

    /// An infectious agent arrived at (or became infectious in) `cell`.
    #[inline]
    pub fn increment(&mut self, cell: Cell) {
        self.counts[cell.flat_index(self.side)] += 1;
    }

    /// An infectious agent left (or stopped being infectious in) `cell`.
    ///
    /// The caller guarantees the cell holds at least one infectious agent.
    #[inline]
    pub fn decrement(&mut self, cell: Cell) {
        let slot = &mut self.counts[cell.flat_index(self.side)];
        debug_assert!(*slot > 0, "density underflow at {cell}");
        *slot -= 1;
    }

    /// Move one infectious agent from `from` to `to`.  No-op when equal.
    #[inline]
    pub fn relocate(&mut self, from: Cell, to: Cell) {
        if from != to {
            self.decrement(from);
            self.increment(to);
        }
    }

    /// Local infectious density NI: the centre cell plus its 8 toroidal
    /// Moore neighbours (9 cells).
    ///
    /// On grids with `side < 3` wrapped neighbours coincide and the same
    /// cell is counted once per offset that reaches it, so the sum can reach
    /// nine times the infectious count.  Accumulated in `u64`.
    pub fn moore_sum(&self, cell: Cell) -> u64 {
        cell.moore_neighbours(self.side)
            .iter()
            .fold(u64::from(self.get(cell)), |acc, &n| acc + u64::from(self.get(n)))
    }

    /// Sum over every cell.  Equals the number of Infectious agents.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// `true` if every cell is zero.
    pub fn is_clear(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

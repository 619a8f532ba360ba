//! Grid coordinates on the toroidal L×L lattice.
//!
//! Coordinates are always kept in `[0, side)`.  Wrapping uses
//! `rem_euclid`, so negative offsets fold back onto the far edge:
//! `(0, 0)` and `(side-1, side-1)` are diagonal neighbours.

/// The eight Moore offsets, excluding `(0, 0)`.
///
/// Order is row-major over `dx ∈ {-1, 0, 1}`, then `dy`.
pub const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A cell of the toroidal grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The cell reached by offset `(dx, dy)` with periodic boundaries.
    #[inline]
    pub fn wrap(self, dx: i64, dy: i64, side: u32) -> Cell {
        let side = i64::from(side);
        Cell {
            x: (i64::from(self.x) + dx).rem_euclid(side) as u32,
            y: (i64::from(self.y) + dy).rem_euclid(side) as u32,
        }
    }

    /// The 8 toroidal Moore neighbours of this cell.
    ///
    /// On grids with `side < 3` some neighbours coincide with each other or
    /// with `self`; they are still returned once per offset.
    pub fn moore_neighbours(self, side: u32) -> [Cell; 8] {
        MOORE_OFFSETS.map(|(dx, dy)| self.wrap(dx, dy, side))
    }

    /// Row-major flat index (`x * side + y`) into an L×L array.
    #[inline(always)]
    pub fn flat_index(self, side: u32) -> usize {
        self.x as usize * side as usize + self.y as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

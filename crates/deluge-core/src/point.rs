//! The [`GridPoint`] coordinate and its four-neighbour generators.

use std::fmt;

/// A `(row, col)` position on an elevation grid.
///
/// No bounds are enforced at construction: a `GridPoint` may lie outside
/// any particular grid, and the neighbour generators routinely produce
/// such points at the grid edge. Consumers check containment themselves
/// (see `Terrain::contains` in `deluge-terrain`).
///
/// Row 0, column 0 is the upper-left corner. "Up" decreases the row,
/// "left" decreases the column.
///
/// # Examples
///
/// ```
/// use deluge_core::GridPoint;
///
/// let p = GridPoint::new(0, 0);
/// assert_eq!(p.up(), GridPoint::new(-1, 0));
/// assert_eq!(p.right(), GridPoint::new(0, 1));
/// assert_eq!(p.to_string(), "{ 0, 0 }");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    row: i32,
    col: i32,
}

impl GridPoint {
    /// Create a point at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Column index.
    pub const fn col(self) -> i32 {
        self.col
    }

    /// The point one row above.
    pub const fn up(self) -> Self {
        Self::new(self.row.saturating_sub(1), self.col)
    }

    /// The point one row below.
    pub const fn down(self) -> Self {
        Self::new(self.row.saturating_add(1), self.col)
    }

    /// The point one column to the left.
    pub const fn left(self) -> Self {
        Self::new(self.row, self.col.saturating_sub(1))
    }

    /// The point one column to the right.
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col.saturating_add(1))
    }

    /// All four neighbours in the fixed order up, down, left, right.
    ///
    /// Every traversal expands neighbours in this order; the depth-first
    /// variants differ from each other only in how that order maps onto
    /// their frontier.
    pub const fn neighbours(self) -> [Self; 4] {
        [self.up(), self.down(), self.left(), self.right()]
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.row, self.col)
    }
}

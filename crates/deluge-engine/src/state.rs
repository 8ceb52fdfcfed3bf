//! Per-cell flooded/dry classification.

use deluge_core::{GridPoint, TerrainError};
use deluge_terrain::Terrain;

/// A `rows x cols` grid of flooded flags, all dry at creation.
///
/// Mutated only by the engine, and only by marking cells flooded: within
/// a run a flooded cell is never unmarked. [`reset`](FloodState::reset)
/// clears everything for the next run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloodState {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    flooded: usize,
}

impl FloodState {
    /// An all-dry state of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
            flooded: 0,
        }
    }

    /// An all-dry state sized to `terrain`.
    pub fn for_terrain(terrain: &Terrain) -> Self {
        Self::new(terrain.rows(), terrain.cols())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index_of(&self, p: GridPoint) -> Option<usize> {
        let r = usize::try_from(p.row()).ok()?;
        let c = usize::try_from(p.col()).ok()?;
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    /// Whether `p` is flooded.
    ///
    /// # Errors
    ///
    /// [`TerrainError::CoordOutOfBounds`] if `p` is off the grid.
    pub fn is_flooded(&self, p: GridPoint) -> Result<bool, TerrainError> {
        self.index_of(p)
            .map(|i| self.cells[i])
            .ok_or(TerrainError::CoordOutOfBounds {
                point: p,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Whether the cell at a row-major index is flooded.
    #[inline]
    pub fn is_flooded_index(&self, index: usize) -> bool {
        self.cells[index]
    }

    /// Mark a cell flooded. Returns `false` if it already was.
    #[inline]
    pub(crate) fn mark_index(&mut self, index: usize) -> bool {
        let cell = &mut self.cells[index];
        if *cell {
            return false;
        }
        *cell = true;
        self.flooded += 1;
        true
    }

    /// Number of flooded cells.
    pub fn flooded_count(&self) -> usize {
        self.flooded
    }

    /// Flooded points in row-major order.
    pub fn flooded_points(&self) -> Vec<GridPoint> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(|(i, _)| GridPoint::new((i / self.cols) as i32, (i % self.cols) as i32))
            .collect()
    }

    /// Row-major flooded flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    /// Return every cell to dry.
    pub fn reset(&mut self) {
        self.cells.fill(false);
        self.flooded = 0;
    }
}

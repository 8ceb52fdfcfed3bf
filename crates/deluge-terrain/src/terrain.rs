//! The immutable [`Terrain`] model: elevations, water level, sources.

use deluge_core::{GridPoint, TerrainError};
use smallvec::SmallVec;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// An immutable rectangular elevation surface with a fixed water level
/// and a fixed list of water sources.
///
/// Elevations are stored row-major in a shared buffer, so
/// [`with_water_level`](Terrain::with_water_level) can produce a terrain
/// at a different level without copying the grid.
///
/// Grid dimensions never change after construction. Elevation lookups
/// outside `[0, rows) x [0, cols)` fail with
/// [`TerrainError::CoordOutOfBounds`] rather than returning a default.
///
/// # Examples
///
/// ```
/// use deluge_core::GridPoint;
/// use deluge_terrain::Terrain;
///
/// let t = Terrain::new(
///     vec![vec![3.0, 2.0, 1.0, 2.0, 3.0]],
///     vec![GridPoint::new(0, 2)],
///     2.0,
/// )
/// .unwrap();
/// assert!(t.is_eligible(GridPoint::new(0, 1)));
/// assert!(!t.is_eligible(GridPoint::new(0, 0)));
/// assert!(!t.is_eligible(GridPoint::new(0, 5)));
/// ```
#[derive(Clone, Debug)]
pub struct Terrain {
    rows: usize,
    cols: usize,
    elevations: Arc<[f64]>,
    sources: Vec<GridPoint>,
    water_level: f64,
    /// `(min, max)`, computed on first request.
    bounds: OnceLock<(f64, f64)>,
}

impl Terrain {
    /// Build a terrain from nested rows of elevations.
    ///
    /// # Errors
    ///
    /// - [`TerrainError::EmptyGrid`] if there are no rows or row 0 is empty.
    /// - [`TerrainError::RaggedRows`] if any row differs in length from row 0.
    /// - [`TerrainError::NoSources`] if `sources` is empty.
    pub fn new(
        elevations: Vec<Vec<f64>>,
        sources: Vec<GridPoint>,
        water_level: f64,
    ) -> Result<Self, TerrainError> {
        let rows = elevations.len();
        let cols = elevations.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(TerrainError::EmptyGrid);
        }
        if let Some((row, found)) = elevations
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(TerrainError::RaggedRows {
                row,
                expected: cols,
                found,
            });
        }
        let flat: Vec<f64> = elevations.into_iter().flatten().collect();
        Self::from_flat(rows, cols, flat, sources, water_level)
    }

    /// Build a terrain from a row-major buffer of `rows * cols` elevations.
    ///
    /// # Errors
    ///
    /// - [`TerrainError::EmptyGrid`] if either dimension is zero.
    /// - [`TerrainError::DimensionMismatch`] if `data.len() != rows * cols`.
    /// - [`TerrainError::NoSources`] if `sources` is empty.
    pub fn from_flat(
        rows: usize,
        cols: usize,
        data: Vec<f64>,
        sources: Vec<GridPoint>,
        water_level: f64,
    ) -> Result<Self, TerrainError> {
        if rows == 0 || cols == 0 {
            return Err(TerrainError::EmptyGrid);
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(TerrainError::DimensionMismatch {
                expected: usize::MAX,
                found: data.len(),
            })?;
        if data.len() != expected {
            return Err(TerrainError::DimensionMismatch {
                expected,
                found: data.len(),
            });
        }
        if sources.is_empty() {
            return Err(TerrainError::NoSources);
        }
        Ok(Self {
            rows,
            cols,
            elevations: data.into(),
            sources,
            water_level,
            bounds: OnceLock::new(),
        })
    }

    /// The same grid and sources at a different water level.
    ///
    /// The elevation buffer is shared; the min/max cache carries over.
    pub fn with_water_level(&self, water_level: f64) -> Self {
        Self {
            water_level,
            ..self.clone()
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.elevations.len()
    }

    /// The water sources, in the order they were supplied.
    ///
    /// Sources are not required to be on the grid or eligible.
    pub fn sources(&self) -> &[GridPoint] {
        &self.sources
    }

    /// The water level every eligibility check compares against.
    pub fn water_level(&self) -> f64 {
        self.water_level
    }

    /// Row-major index of `p`, or `None` if `p` is off the grid.
    #[inline]
    pub fn index_of(&self, p: GridPoint) -> Option<usize> {
        let r = usize::try_from(p.row()).ok()?;
        let c = usize::try_from(p.col()).ok()?;
        (r < self.rows && c < self.cols).then(|| r * self.cols + c)
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        self.index_of(p).is_some()
    }

    /// Elevation at `p`.
    ///
    /// # Errors
    ///
    /// [`TerrainError::CoordOutOfBounds`] if `p` is off the grid.
    pub fn elevation(&self, p: GridPoint) -> Result<f64, TerrainError> {
        self.index_of(p)
            .map(|i| self.elevations[i])
            .ok_or(TerrainError::CoordOutOfBounds {
                point: p,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Elevation at a row-major index already known to be in range.
    #[inline]
    pub fn elevation_at_index(&self, index: usize) -> f64 {
        self.elevations[index]
    }

    /// Whether the cell at an in-range index is at or below the water level.
    #[inline]
    pub fn is_eligible_index(&self, index: usize) -> bool {
        self.elevations[index] <= self.water_level
    }

    /// `true` iff `p` is on the grid and its elevation is at or below the
    /// water level. Off-grid points are simply ineligible.
    #[inline]
    pub fn is_eligible(&self, p: GridPoint) -> bool {
        self.index_of(p)
            .is_some_and(|i| self.is_eligible_index(i))
    }

    /// Whether `p` is at or below the water level.
    ///
    /// # Errors
    ///
    /// [`TerrainError::CoordOutOfBounds`] if `p` is off the grid. Use
    /// [`is_eligible`](Self::is_eligible) when off-grid should read as
    /// `false`.
    pub fn is_below_or_at(&self, p: GridPoint) -> Result<bool, TerrainError> {
        Ok(self.elevation(p)? <= self.water_level)
    }

    /// Whether `p` is strictly above the water level.
    ///
    /// # Errors
    ///
    /// [`TerrainError::CoordOutOfBounds`] if `p` is off the grid.
    pub fn is_above(&self, p: GridPoint) -> Result<bool, TerrainError> {
        Ok(self.elevation(p)? > self.water_level)
    }

    /// The neighbours of `p` (up, down, left, right) that lie on the grid.
    pub fn on_grid_neighbours(&self, p: GridPoint) -> SmallVec<[GridPoint; 4]> {
        p.neighbours()
            .into_iter()
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Lowest elevation on the grid. Computed once and cached.
    pub fn min_elevation(&self) -> f64 {
        self.elevation_bounds().0
    }

    /// Highest elevation on the grid. Computed once and cached.
    pub fn max_elevation(&self) -> f64 {
        self.elevation_bounds().1
    }

    fn elevation_bounds(&self) -> (f64, f64) {
        *self.bounds.get_or_init(|| {
            let first = self.elevations[0];
            self.elevations[1..]
                .iter()
                .fold((first, first), |(lo, hi), &e| (lo.min(e), hi.max(e)))
        })
    }

    /// Iterate over all on-grid points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).map(move |c| GridPoint::new(r as i32, c as i32))
        })
    }
}

/// One row per line, each value as `{:5.1} `.
impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.elevations.chunks(self.cols) {
            for e in row {
                write!(f, "{e:5.1} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

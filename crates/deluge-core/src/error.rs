//! Error types for terrain construction and elevation queries.

use crate::point::GridPoint;
use std::error::Error;
use std::fmt;

/// Errors from building a terrain or querying it at a coordinate.
///
/// Construction variants (`EmptyGrid`, `RaggedRows`, `DimensionMismatch`,
/// `NoSources`) are fatal to the caller: no partially-usable terrain is
/// ever produced. `CoordOutOfBounds` is recoverable and is what the flood
/// engine filters out locally during neighbour expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TerrainError {
    /// A coordinate lies outside `[0, rows) x [0, cols)`.
    CoordOutOfBounds {
        /// The offending coordinate.
        point: GridPoint,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// The elevation grid has no rows or no columns.
    EmptyGrid,
    /// A row's length differs from the first row's.
    RaggedRows {
        /// Index of the first mismatching row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the mismatching row.
        found: usize,
    },
    /// A flat elevation buffer does not hold `rows * cols` values.
    DimensionMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the buffer supplied.
        found: usize,
    },
    /// The source list is empty.
    NoSources,
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { point, rows, cols } => {
                write!(f, "point {point} not on the map: bounds [0, {rows}) x [0, {cols})")
            }
            Self::EmptyGrid => write!(f, "elevation grid must have at least one row and column"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} columns, expected {expected}"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "expected {expected} elevations, got {found}")
            }
            Self::NoSources => write!(f, "at least one water source is required"),
        }
    }
}

impl Error for TerrainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_message_names_point_and_bounds() {
        let e = TerrainError::CoordOutOfBounds {
            point: GridPoint::new(-1, 4),
            rows: 3,
            cols: 5,
        };
        assert_eq!(
            e.to_string(),
            "point { -1, 4 } not on the map: bounds [0, 3) x [0, 5)"
        );
    }

    #[test]
    fn ragged_rows_message() {
        let e = TerrainError::RaggedRows {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(e.to_string(), "row 2 has 3 columns, expected 4");
    }

    #[test]
    fn construction_errors_have_no_source() {
        assert!(TerrainError::NoSources.source().is_none());
        assert!(TerrainError::EmptyGrid.source().is_none());
    }
}

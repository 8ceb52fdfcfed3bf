//! Map-file loading.
//!
//! The map format is a stream of whitespace-separated tokens:
//!
//! ```text
//! <water level>
//! <number of sources>
//! <source row> <source col>      (repeated)
//! <rows> <cols>
//! <elevation>                    (rows * cols values, row-major)
//! ```
//!
//! Line breaks carry no meaning. Tokens after the last elevation are
//! ignored.

use crate::terrain::Terrain;
use deluge_core::{GridPoint, TerrainError};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Errors from reading or parsing a map file.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The input ended before a required value.
    UnexpectedEnd {
        /// What was being read when input ran out.
        expected: &'static str,
    },
    /// A token could not be parsed as the required number.
    InvalidNumber {
        /// The offending token.
        token: String,
        /// What the token was supposed to be.
        expected: &'static str,
    },
    /// The parsed values do not form a valid terrain.
    Terrain(TerrainError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of map data while reading {expected}")
            }
            Self::InvalidNumber { token, expected } => {
                write!(f, "invalid {expected}: '{token}'")
            }
            Self::Terrain(e) => write!(f, "invalid terrain: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Terrain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TerrainError> for LoadError {
    fn from(e: TerrainError) -> Self {
        Self::Terrain(e)
    }
}

/// Pulls typed values off a whitespace token stream.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, LoadError> {
        let token = self
            .inner
            .next()
            .ok_or(LoadError::UnexpectedEnd { expected })?;
        token.parse().map_err(|_| LoadError::InvalidNumber {
            token: token.to_string(),
            expected,
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

/// Parse a terrain from map-format text.
///
/// # Errors
///
/// [`LoadError::UnexpectedEnd`] or [`LoadError::InvalidNumber`] for
/// truncated or non-numeric input, [`LoadError::Terrain`] if the values
/// describe an invalid terrain (zero dimensions, no sources).
///
/// # Examples
///
/// ```
/// use deluge_terrain::parse_map;
///
/// let t = parse_map("2.0\n1\n0 2\n1 5\n3 2 1 2 3\n").unwrap();
/// assert_eq!((t.rows(), t.cols()), (1, 5));
/// assert_eq!(t.water_level(), 2.0);
/// ```
pub fn parse_map(text: &str) -> Result<Terrain, LoadError> {
    let mut tokens = Tokens::new(text);

    let water_level: f64 = tokens.next("water level")?;
    let n_sources: usize = tokens.next("source count")?;
    let mut sources = Vec::with_capacity(n_sources.min(1024));
    for _ in 0..n_sources {
        let row: i32 = tokens.next("source row")?;
        let col: i32 = tokens.next("source column")?;
        sources.push(GridPoint::new(row, col));
    }

    let rows: usize = tokens.next("row count")?;
    let cols: usize = tokens.next("column count")?;
    let cells = rows.checked_mul(cols).ok_or(LoadError::Terrain(
        TerrainError::DimensionMismatch {
            expected: usize::MAX,
            found: 0,
        },
    ))?;
    let mut elevations = Vec::with_capacity(cells.min(1 << 20));
    for _ in 0..cells {
        elevations.push(tokens.next::<f64>("elevation")?);
    }

    let trailing = tokens.remaining();
    if trailing > 0 {
        log::debug!("ignoring {trailing} trailing tokens after elevation grid");
    }

    let terrain = Terrain::from_flat(rows, cols, elevations, sources, water_level)?;
    log::debug!(
        "parsed {}x{} map, {} sources, water level {}",
        terrain.rows(),
        terrain.cols(),
        terrain.sources().len(),
        terrain.water_level()
    );
    Ok(terrain)
}

/// Read and parse a map file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_map`].
pub fn load_map(path: impl AsRef<Path>) -> Result<Terrain, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_map(&text)
}

//! Traversal strategy selection.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which frontier discipline a flood run uses.
///
/// Every variant produces the same final flood classification; only the
/// order in which cells are admitted differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// FIFO queue: cells flood level by level outward from all sources at once.
    BreadthFirst,
    /// LIFO stack: the most recently admitted cell is expanded next.
    DepthFirst,
    /// Recursive descent up, down, left, right, with a depth ceiling.
    DepthFirstRecursive,
}

impl Algorithm {
    /// All algorithms, in CLI listing order.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::DepthFirstRecursive,
    ];

    /// Canonical short name: `queue`, `stack` or `recursive`.
    pub fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "queue",
            Self::DepthFirst => "stack",
            Self::DepthFirstRecursive => "recursive",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid algorithm '{}': expected queue, stack or recursive",
            self.name
        )
    }
}

impl Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "queue" | "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "stack" | "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "recursive" | "depth-first-recursive" => Ok(Self::DepthFirstRecursive),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
            }),
        }
    }
}

//! Errors from flood runs.
//!
//! Off-grid neighbours never surface here: the traversals treat them as
//! ordinary ineligible candidates.

use crate::engine::RunPhase;
use std::error::Error;
use std::fmt;

/// Errors returned by the [`FloodEngine`](crate::FloodEngine) run entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FloodError {
    /// A run was requested while the engine was not `Idle`. Call
    /// [`reset`](crate::FloodEngine::reset) first.
    NotIdle {
        /// Phase the engine was in.
        phase: RunPhase,
    },
    /// The cancellation token fired. The state holds the partial flood.
    Cancelled {
        /// Cells admitted before the run stopped.
        admitted: usize,
    },
}

impl fmt::Display for FloodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotIdle { phase } => {
                write!(f, "engine is {phase}, reset it before running again")
            }
            Self::Cancelled { admitted } => {
                write!(f, "flood run cancelled after {admitted} admissions")
            }
        }
    }
}

impl Error for FloodError {}

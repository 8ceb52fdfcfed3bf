//! Per-run traversal counters.
//!
//! [`RunMetrics`] is returned by every successful flood run. The counters
//! make the three traversals comparable beyond their shared result: how
//! many candidates each rejected, how large its frontier grew, and how
//! deep the recursive variant went.

use crate::algorithm::Algorithm;

/// Counters collected during one flood run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunMetrics {
    /// Traversal that produced these numbers.
    pub algorithm: Algorithm,
    /// Cells marked flooded. Equal to the final flooded count.
    pub admitted: usize,
    /// Cells whose four neighbours were examined.
    pub expanded: usize,
    /// Candidates discarded for lying off the grid.
    pub rejected_off_grid: usize,
    /// On-grid candidates discarded for being above the water level.
    pub rejected_ineligible: usize,
    /// Eligible candidates discarded because they were already flooded.
    pub rejected_flooded: usize,
    /// Sources that were off the grid or above the water level.
    pub sources_rejected: usize,
    /// Largest explicit frontier size observed (queue, stack, or the
    /// recursive variant's overflow stack).
    pub peak_frontier: usize,
    /// Deepest recursion level that expanded a cell. Zero for the
    /// iterative traversals.
    pub max_depth: usize,
    /// Cells the recursive traversal pushed to its overflow stack after
    /// hitting the depth ceiling.
    pub deferred: usize,
    /// Wall-clock time of the run, in microseconds.
    pub elapsed_us: u64,
}

impl RunMetrics {
    /// All-zero counters for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            admitted: 0,
            expanded: 0,
            rejected_off_grid: 0,
            rejected_ineligible: 0,
            rejected_flooded: 0,
            sources_rejected: 0,
            peak_frontier: 0,
            max_depth: 0,
            deferred: 0,
            elapsed_us: 0,
        }
    }

    /// Total candidates considered, admitted or not.
    pub fn candidates(&self) -> usize {
        self.admitted + self.rejected_off_grid + self.rejected_ineligible + self.rejected_flooded
    }

    #[inline]
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}

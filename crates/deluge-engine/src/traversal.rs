//! The three frontier disciplines and the admission rule they share.

use std::collections::VecDeque;

use deluge_core::GridPoint;
use deluge_terrain::Terrain;

use crate::cancel::CancelToken;
use crate::error::FloodError;
use crate::metrics::RunMetrics;
use crate::observer::FloodObserver;
use crate::state::FloodState;

/// Outcome of offering one candidate to the flood.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Admission {
    Admitted,
    OffGrid,
    Ineligible,
    AlreadyFlooded,
}

/// Borrowed working set for a single run.
pub(crate) struct Run<'a> {
    pub(crate) terrain: &'a Terrain,
    pub(crate) state: &'a mut FloodState,
    pub(crate) observer: &'a mut dyn FloodObserver,
    pub(crate) cancel: Option<&'a CancelToken>,
    pub(crate) metrics: RunMetrics,
}

impl Run<'_> {
    /// Check-and-mark a candidate: on-grid, at or below the water level,
    /// not yet flooded. Marking happens here, before the candidate enters
    /// any frontier, so no point is ever queued twice.
    #[inline]
    fn offer(&mut self, p: GridPoint) -> Result<Admission, FloodError> {
        let Some(index) = self.terrain.index_of(p) else {
            self.metrics.rejected_off_grid += 1;
            return Ok(Admission::OffGrid);
        };
        if !self.terrain.is_eligible_index(index) {
            self.metrics.rejected_ineligible += 1;
            return Ok(Admission::Ineligible);
        }
        if !self.state.mark_index(index) {
            self.metrics.rejected_flooded += 1;
            return Ok(Admission::AlreadyFlooded);
        }
        self.metrics.admitted += 1;
        self.observer.on_admit(p, self.state);
        if self.cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(FloodError::Cancelled {
                admitted: self.metrics.admitted,
            });
        }
        Ok(Admission::Admitted)
    }

    /// [`offer`](Self::offer) for a source, logging sources that can never flood.
    fn seed(&mut self, source: GridPoint) -> Result<bool, FloodError> {
        match self.offer(source)? {
            Admission::Admitted => Ok(true),
            Admission::AlreadyFlooded => Ok(false),
            Admission::OffGrid => {
                self.metrics.sources_rejected += 1;
                log::warn!("source {source} is off the map and will not flood");
                Ok(false)
            }
            Admission::Ineligible => {
                self.metrics.sources_rejected += 1;
                log::debug!("source {source} is above the water level");
                Ok(false)
            }
        }
    }
}

pub(crate) fn breadth_first(run: &mut Run<'_>) -> Result<(), FloodError> {
    let mut frontier = VecDeque::new();
    for &source in run.terrain.sources() {
        if run.seed(source)? {
            frontier.push_back(source);
        }
    }
    run.metrics.observe_frontier(frontier.len());

    while let Some(p) = frontier.pop_front() {
        run.metrics.expanded += 1;
        for n in p.neighbours() {
            if run.offer(n)? == Admission::Admitted {
                frontier.push_back(n);
            }
        }
        run.metrics.observe_frontier(frontier.len());
    }
    Ok(())
}

pub(crate) fn depth_first(run: &mut Run<'_>) -> Result<(), FloodError> {
    let mut frontier = Vec::new();
    for &source in run.terrain.sources() {
        if run.seed(source)? {
            frontier.push(source);
        }
    }
    run.metrics.observe_frontier(frontier.len());

    while let Some(p) = frontier.pop() {
        run.metrics.expanded += 1;
        for n in p.neighbours() {
            if run.offer(n)? == Admission::Admitted {
                frontier.push(n);
            }
        }
        run.metrics.observe_frontier(frontier.len());
    }
    Ok(())
}

/// Recursive descent with a depth ceiling.
///
/// Each source is expanded by recursing into its neighbours in up, down,
/// left, right order. A cell admitted at `max_depth` is not expanded in
/// place; it goes onto `overflow` and is expanded from depth zero once the
/// current descent unwinds. With a ceiling above the region size this is
/// exactly the plain recursive flood.
pub(crate) fn depth_first_recursive(
    run: &mut Run<'_>,
    max_depth: usize,
) -> Result<(), FloodError> {
    let mut overflow = Vec::new();
    for &source in run.terrain.sources() {
        if run.seed(source)? {
            expand(run, source, 0, max_depth, &mut overflow)?;
        }
        while let Some(p) = overflow.pop() {
            expand(run, p, 0, max_depth, &mut overflow)?;
        }
    }
    Ok(())
}

fn visit(
    run: &mut Run<'_>,
    p: GridPoint,
    depth: usize,
    max_depth: usize,
    overflow: &mut Vec<GridPoint>,
) -> Result<(), FloodError> {
    if run.offer(p)? != Admission::Admitted {
        return Ok(());
    }
    if depth >= max_depth {
        log::trace!("deferring {p} at depth {depth}");
        run.metrics.deferred += 1;
        overflow.push(p);
        run.metrics.observe_frontier(overflow.len());
        return Ok(());
    }
    expand(run, p, depth, max_depth, overflow)
}

#[inline]
fn expand(
    run: &mut Run<'_>,
    p: GridPoint,
    depth: usize,
    max_depth: usize,
    overflow: &mut Vec<GridPoint>,
) -> Result<(), FloodError> {
    run.metrics.expanded += 1;
    run.metrics.max_depth = run.metrics.max_depth.max(depth);
    for n in p.neighbours() {
        visit(run, n, depth + 1, max_depth, overflow)?;
    }
    Ok(())
}

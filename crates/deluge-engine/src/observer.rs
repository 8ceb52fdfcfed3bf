//! The per-admission observation hook.
//!
//! Incremental rendering, pacing, progress reporting and test probes all
//! attach here instead of living inside the traversal loops.

use crate::state::FloodState;
use deluge_core::GridPoint;

/// Receives a callback each time a cell is admitted during a flood run.
pub trait FloodObserver {
    /// Called right after `point` is marked flooded. `state` already
    /// includes it.
    fn on_admit(&mut self, point: GridPoint, state: &FloodState);

    /// Called once when a run completes without cancellation.
    fn on_finish(&mut self, state: &FloodState) {
        let _ = state;
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl FloodObserver for NoopObserver {
    #[inline]
    fn on_admit(&mut self, _point: GridPoint, _state: &FloodState) {}
}

/// Adapts a closure into a [`FloodObserver`].
///
/// ```
/// use deluge_core::GridPoint;
/// use deluge_engine::{Algorithm, FloodEngine, FloodState, FnObserver};
/// use deluge_terrain::Terrain;
///
/// let terrain = Terrain::new(vec![vec![0.0, 0.0, 9.0]], vec![GridPoint::new(0, 0)], 1.0).unwrap();
/// let mut seen = Vec::new();
/// let mut engine = FloodEngine::new(&terrain);
/// engine
///     .run_observed(
///         Algorithm::BreadthFirst,
///         &mut FnObserver(|p: GridPoint, _: &FloodState| seen.push(p)),
///     )
///     .unwrap();
/// assert_eq!(seen, vec![GridPoint::new(0, 0), GridPoint::new(0, 1)]);
/// ```
pub struct FnObserver<F>(pub F);

impl<F> FloodObserver for FnObserver<F>
where
    F: FnMut(GridPoint, &FloodState),
{
    fn on_admit(&mut self, point: GridPoint, state: &FloodState) {
        (self.0)(point, state)
    }
}

/// Records admission order.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// Points in the order they were admitted.
    pub admitted: Vec<GridPoint>,
    /// Whether `on_finish` has been called.
    pub finished: bool,
}

impl FloodObserver for RecordingObserver {
    fn on_admit(&mut self, point: GridPoint, _state: &FloodState) {
        self.admitted.push(point);
    }

    fn on_finish(&mut self, _state: &FloodState) {
        self.finished = true;
    }
}

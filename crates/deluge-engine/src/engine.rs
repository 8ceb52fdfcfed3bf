//! The [`FloodEngine`]: flood state plus the run state machine.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --run--> Running --frontier empty--> Done
//!                  |
//!                  +--token fired--> Cancelled
//! any phase --reset--> Idle
//! ```
//!
//! A run only starts from `Idle`. Once `Done` (or `Cancelled`) the state
//! is left untouched until [`reset`](FloodEngine::reset) is called, so it
//! can be read back at leisure.

use std::fmt;
use std::time::Instant;

use deluge_core::{GridPoint, TerrainError};
use deluge_terrain::Terrain;

use crate::algorithm::Algorithm;
use crate::cancel::CancelToken;
use crate::config::{ConfigError, EngineConfig};
use crate::error::FloodError;
use crate::metrics::RunMetrics;
use crate::observer::{FloodObserver, NoopObserver};
use crate::state::FloodState;
use crate::traversal::{self, Run};

// Compile-time assertion: an engine can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FloodEngine<'static>>();
    }
};

// ── RunPhase ────────────────────────────────────────────────────

/// Where an engine is in its run lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunPhase {
    /// State is all dry; a run may start.
    Idle,
    /// A traversal is consuming its frontier.
    Running,
    /// The frontier emptied; every reachable eligible cell is flooded.
    Done,
    /// The run was stopped by its cancellation token.
    Cancelled,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        })
    }
}

// ── FloodEngine ─────────────────────────────────────────────────

/// Owns the flood classification for one terrain and runs traversals
/// over it.
///
/// The terrain is borrowed and never mutated. Each engine holds its own
/// [`FloodState`]; nothing is shared between engines.
///
/// # Example
///
/// ```
/// use deluge_core::GridPoint;
/// use deluge_engine::{Algorithm, FloodEngine};
/// use deluge_terrain::Terrain;
///
/// let terrain = Terrain::new(
///     vec![vec![3.0, 2.0, 1.0, 2.0, 3.0]],
///     vec![GridPoint::new(0, 2)],
///     2.0,
/// )
/// .unwrap();
/// let mut engine = FloodEngine::new(&terrain);
/// let metrics = engine.run(Algorithm::BreadthFirst).unwrap();
/// assert_eq!(metrics.admitted, 3);
/// assert!(engine.is_flooded(GridPoint::new(0, 1)).unwrap());
/// assert!(!engine.is_flooded(GridPoint::new(0, 0)).unwrap());
/// ```
#[derive(Debug)]
pub struct FloodEngine<'t> {
    terrain: &'t Terrain,
    state: FloodState,
    config: EngineConfig,
    phase: RunPhase,
    cancel: Option<CancelToken>,
}

impl<'t> FloodEngine<'t> {
    /// An idle engine for `terrain` with the default configuration.
    pub fn new(terrain: &'t Terrain) -> Self {
        Self {
            terrain,
            state: FloodState::for_terrain(terrain),
            config: EngineConfig::default(),
            phase: RunPhase::Idle,
            cancel: None,
        }
    }

    /// An idle engine for `terrain` with a validated configuration.
    pub fn with_config(terrain: &'t Terrain, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(terrain)
        })
    }

    /// Attach a cancellation token, checked before the run starts and after
    /// every admission.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The terrain being flooded.
    pub fn terrain(&self) -> &'t Terrain {
        self.terrain
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// The flood classification.
    pub fn state(&self) -> &FloodState {
        &self.state
    }

    /// Consume the engine, keeping the flood classification.
    pub fn into_state(self) -> FloodState {
        self.state
    }

    /// Whether `p` is flooded.
    ///
    /// # Errors
    ///
    /// [`TerrainError::CoordOutOfBounds`] if `p` is off the grid.
    pub fn is_flooded(&self, p: GridPoint) -> Result<bool, TerrainError> {
        self.state.is_flooded(p)
    }

    /// Return to `Idle` with every cell dry.
    pub fn reset(&mut self) {
        self.state.reset();
        self.phase = RunPhase::Idle;
    }

    /// Run `algorithm` without an observer.
    ///
    /// # Errors
    ///
    /// [`FloodError::NotIdle`] if the engine has already run and was not
    /// reset; [`FloodError::Cancelled`] if the attached token fired.
    pub fn run(&mut self, algorithm: Algorithm) -> Result<RunMetrics, FloodError> {
        self.run_observed(algorithm, &mut NoopObserver)
    }

    /// Run `algorithm`, calling `observer` after each admission.
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    pub fn run_observed(
        &mut self,
        algorithm: Algorithm,
        observer: &mut dyn FloodObserver,
    ) -> Result<RunMetrics, FloodError> {
        if self.phase != RunPhase::Idle {
            return Err(FloodError::NotIdle { phase: self.phase });
        }
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            self.phase = RunPhase::Cancelled;
            log::debug!("{algorithm} flood not started: token already fired");
            return Err(FloodError::Cancelled { admitted: 0 });
        }
        self.phase = RunPhase::Running;
        log::debug!(
            "{algorithm} flood over {}x{} terrain, water level {}, {} sources",
            self.terrain.rows(),
            self.terrain.cols(),
            self.terrain.water_level(),
            self.terrain.sources().len()
        );

        let start = Instant::now();
        let mut run = Run {
            terrain: self.terrain,
            state: &mut self.state,
            observer: &mut *observer,
            cancel: self.cancel.as_ref(),
            metrics: RunMetrics::new(algorithm),
        };
        let outcome = match algorithm {
            Algorithm::BreadthFirst => traversal::breadth_first(&mut run),
            Algorithm::DepthFirst => traversal::depth_first(&mut run),
            Algorithm::DepthFirstRecursive => {
                traversal::depth_first_recursive(&mut run, self.config.max_recursion_depth)
            }
        };
        let mut metrics = run.metrics;
        metrics.elapsed_us = start.elapsed().as_micros() as u64;

        match outcome {
            Ok(()) => {
                self.phase = RunPhase::Done;
                observer.on_finish(&self.state);
                log::debug!(
                    "{algorithm} flood done: {} of {} cells flooded, {} expanded, peak frontier {}, {} us",
                    metrics.admitted,
                    self.terrain.cell_count(),
                    metrics.expanded,
                    metrics.peak_frontier,
                    metrics.elapsed_us
                );
                Ok(metrics)
            }
            Err(e) => {
                self.phase = RunPhase::Cancelled;
                log::debug!("{algorithm} flood stopped: {e}");
                Err(e)
            }
        }
    }

    /// Breadth-first flood (FIFO frontier).
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    pub fn breadth_first(
        &mut self,
        observer: &mut dyn FloodObserver,
    ) -> Result<RunMetrics, FloodError> {
        self.run_observed(Algorithm::BreadthFirst, observer)
    }

    /// Depth-first flood (LIFO frontier).
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    pub fn depth_first(
        &mut self,
        observer: &mut dyn FloodObserver,
    ) -> Result<RunMetrics, FloodError> {
        self.run_observed(Algorithm::DepthFirst, observer)
    }

    /// Recursive depth-first flood, bounded by
    /// [`EngineConfig::max_recursion_depth`].
    ///
    /// # Errors
    ///
    /// As [`run`](Self::run).
    pub fn depth_first_recursive(
        &mut self,
        observer: &mut dyn FloodObserver,
    ) -> Result<RunMetrics, FloodError> {
        self.run_observed(Algorithm::DepthFirstRecursive, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{FnObserver, RecordingObserver};
    use deluge_test_utils::fixtures;

    fn p(r: i32, c: i32) -> GridPoint {
        GridPoint::new(r, c)
    }

    fn flat(rows: usize, cols: usize, sources: Vec<GridPoint>) -> Terrain {
        Terrain::from_flat(rows, cols, vec![0.0; rows * cols], sources, 0.0).unwrap()
    }

    // ── Scenarios ───────────────────────────────────────────────

    #[test]
    fn pit_floods_only_its_floor() {
        let t = Terrain::new(
            vec![
                vec![5.0, 5.0, 5.0],
                vec![5.0, 0.0, 5.0],
                vec![5.0, 5.0, 5.0],
            ],
            vec![p(1, 1)],
            0.0,
        )
        .unwrap();
        for alg in Algorithm::ALL {
            let mut e = FloodEngine::new(&t);
            let m = e.run(alg).unwrap();
            assert_eq!(e.state().flooded_points(), vec![p(1, 1)], "{alg}");
            assert_eq!(m.admitted, 1);
            assert_eq!(m.rejected_ineligible, 4);
        }
    }

    #[test]
    fn valley_floods_to_water_level() {
        let t = Terrain::new(vec![vec![3.0, 2.0, 1.0, 2.0, 3.0]], vec![p(0, 2)], 2.0).unwrap();
        for alg in Algorithm::ALL {
            let mut e = FloodEngine::new(&t);
            e.run(alg).unwrap();
            assert_eq!(
                e.state().flooded_points(),
                vec![p(0, 1), p(0, 2), p(0, 3)],
                "{alg}"
            );
        }
    }

    #[test]
    fn flat_grid_with_two_sources_floods_everything() {
        let t = flat(3, 3, vec![p(0, 0), p(2, 2)]);
        for alg in Algorithm::ALL {
            let mut e = FloodEngine::new(&t);
            let m = e.run(alg).unwrap();
            assert_eq!(e.state().flooded_count(), 9, "{alg}");
            assert_eq!(m.admitted, 9);
            assert_eq!(m.expanded, 9);
        }
    }

    #[test]
    fn high_source_does_not_seed() {
        let t = Terrain::new(vec![vec![0.0, 9.0, 0.0]], vec![p(0, 1)], 1.0).unwrap();
        for alg in Algorithm::ALL {
            let mut e = FloodEngine::new(&t);
            let m = e.run(alg).unwrap();
            assert_eq!(e.state().flooded_count(), 0, "{alg}");
            assert_eq!(m.sources_rejected, 1);
        }
    }

    #[test]
    fn off_grid_source_is_ignored() {
        let t = flat(2, 2, vec![p(-1, 0), p(5, 5)]);
        let mut e = FloodEngine::new(&t);
        let m = e.run(Algorithm::DepthFirst).unwrap();
        assert_eq!(e.state().flooded_count(), 0);
        assert_eq!(m.sources_rejected, 2);
        assert_eq!(m.rejected_off_grid, 2);
    }

    #[test]
    fn duplicate_sources_are_admitted_once() {
        let t = flat(1, 2, vec![p(0, 0), p(0, 0), p(0, 1)]);
        for alg in Algorithm::ALL {
            let mut e = FloodEngine::new(&t);
            let m = e.run(alg).unwrap();
            assert_eq!(m.admitted, 2, "{alg}");
            assert_eq!(m.sources_rejected, 0);
        }
    }

    // ── Visit order ─────────────────────────────────────────────

    #[test]
    fn breadth_first_admits_level_by_level() {
        let t = flat(1, 5, vec![p(0, 2)]);
        let mut rec = RecordingObserver::default();
        FloodEngine::new(&t).breadth_first(&mut rec).unwrap();
        assert_eq!(rec.admitted, vec![p(0, 2), p(0, 1), p(0, 3), p(0, 0), p(0, 4)]);
        assert!(rec.finished);
    }

    #[test]
    fn depth_first_expands_most_recent_admission() {
        let t = flat(1, 5, vec![p(0, 2)]);
        let mut rec = RecordingObserver::default();
        FloodEngine::new(&t).depth_first(&mut rec).unwrap();
        // (0,2) admits left (0,1) then right (0,3); (0,3) is popped first.
        assert_eq!(rec.admitted, vec![p(0, 2), p(0, 1), p(0, 3), p(0, 4), p(0, 0)]);
    }

    #[test]
    fn recursive_plunges_left_before_right() {
        let t = flat(1, 5, vec![p(0, 2)]);
        let mut rec = RecordingObserver::default();
        FloodEngine::new(&t).depth_first_recursive(&mut rec).unwrap();
        assert_eq!(rec.admitted, vec![p(0, 2), p(0, 1), p(0, 0), p(0, 3), p(0, 4)]);
    }

    // ── Recursion ceiling ───────────────────────────────────────

    #[test]
    fn recursion_ceiling_defers_instead_of_descending() {
        let t = flat(1, 50, vec![p(0, 0)]);
        let config = EngineConfig {
            max_recursion_depth: 4,
        };
        let mut e = FloodEngine::with_config(&t, config).unwrap();
        let m = e.run(Algorithm::DepthFirstRecursive).unwrap();
        assert_eq!(e.state().flooded_count(), 50);
        assert!(m.deferred > 0);
        assert!(m.max_depth < 4);
    }

    #[test]
    fn unlimited_ceiling_never_defers_small_regions() {
        let t = flat(4, 4, vec![p(0, 0)]);
        let mut e = FloodEngine::new(&t);
        let m = e.run(Algorithm::DepthFirstRecursive).unwrap();
        assert_eq!(m.deferred, 0);
        assert_eq!(m.peak_frontier, 0);
        assert_eq!(m.max_depth, 15);
    }

    #[test]
    fn deep_serpentine_does_not_exhaust_the_stack() {
        // One winding corridor of ~20k cells.
        let t = fixtures::serpentine(200);
        let expected = t.points().filter(|&q| t.is_eligible(q)).count();

        let mut e = FloodEngine::new(&t);
        let m = e.run(Algorithm::DepthFirstRecursive).unwrap();
        assert_eq!(e.state().flooded_count(), expected);
        assert!(m.deferred > 0);
        assert!(m.max_depth < EngineConfig::DEFAULT_MAX_RECURSION_DEPTH);
    }

    #[test]
    fn with_config_rejects_zero_depth() {
        let t = flat(1, 1, vec![p(0, 0)]);
        let err = FloodEngine::with_config(
            &t,
            EngineConfig {
                max_recursion_depth: 0,
            },
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroRecursionDepth);
    }

    // ── Lifecycle ───────────────────────────────────────────────

    #[test]
    fn second_run_without_reset_is_rejected() {
        let t = flat(2, 2, vec![p(0, 0)]);
        let mut e = FloodEngine::new(&t);
        assert_eq!(e.phase(), RunPhase::Idle);
        e.run(Algorithm::BreadthFirst).unwrap();
        assert_eq!(e.phase(), RunPhase::Done);
        assert_eq!(
            e.run(Algorithm::DepthFirst),
            Err(FloodError::NotIdle {
                phase: RunPhase::Done
            })
        );
        assert_eq!(e.state().flooded_count(), 4);
    }

    #[test]
    fn reset_then_rerun_is_idempotent() {
        let t = Terrain::new(
            vec![vec![0.0, 1.0, 5.0], vec![2.0, 5.0, 0.0], vec![0.0, 0.0, 0.0]],
            vec![p(0, 0)],
            2.0,
        )
        .unwrap();
        for alg in Algorithm::ALL {
            let mut e = FloodEngine::new(&t);
            let first = e.run(alg).unwrap();
            let snapshot = e.state().clone();
            e.reset();
            assert_eq!(e.phase(), RunPhase::Idle);
            assert_eq!(e.state().flooded_count(), 0);
            let second = e.run(alg).unwrap();
            assert_eq!(e.state(), &snapshot, "{alg}");
            assert_eq!(first.admitted, second.admitted);
        }
    }

    #[test]
    fn cancellation_stops_the_run() {
        let t = flat(10, 10, vec![p(0, 0)]);
        let token = CancelToken::new();
        let trigger = token.clone();
        let mut e = FloodEngine::new(&t).with_cancel(token);
        let mut count = 0;
        let mut obs = FnObserver(|_: GridPoint, _: &FloodState| {
            count += 1;
            if count == 5 {
                trigger.cancel();
            }
        });
        let err = e.run_observed(Algorithm::BreadthFirst, &mut obs).unwrap_err();
        assert_eq!(err, FloodError::Cancelled { admitted: 5 });
        assert_eq!(e.phase(), RunPhase::Cancelled);
        assert_eq!(e.state().flooded_count(), 5);

        e.reset();
        assert_eq!(e.phase(), RunPhase::Idle);
    }

    #[test]
    fn fired_token_prevents_any_admission() {
        let dry = Terrain::new(vec![vec![9.0]], vec![p(0, 0)], 0.0).unwrap();
        let wet = flat(3, 3, vec![p(1, 1)]);
        for t in [&dry, &wet] {
            let token = CancelToken::new();
            token.cancel();
            let mut e = FloodEngine::new(t).with_cancel(token);
            let mut rec = RecordingObserver::default();
            let err = e.run_observed(Algorithm::DepthFirst, &mut rec).unwrap_err();
            assert_eq!(err, FloodError::Cancelled { admitted: 0 });
            assert_eq!(e.phase(), RunPhase::Cancelled);
            assert_eq!(e.state().flooded_count(), 0);
            assert!(rec.admitted.is_empty());
            assert!(!rec.finished);
        }
    }

    #[test]
    fn out_of_bounds_flood_query_is_an_error() {
        let t = flat(2, 2, vec![p(0, 0)]);
        let mut e = FloodEngine::new(&t);
        e.run(Algorithm::BreadthFirst).unwrap();
        assert!(e.is_flooded(p(2, 0)).is_err());
        assert!(e.into_state().is_flooded(p(1, 1)).unwrap());
    }
}

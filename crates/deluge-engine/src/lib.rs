//! Flood propagation engine for Deluge terrains.
//!
//! [`FloodEngine`] owns a [`FloodState`] sized to a borrowed
//! [`Terrain`](deluge_terrain::Terrain) and populates it from the
//! terrain's sources with one of three interchangeable traversals:
//!
//! - [`Algorithm::BreadthFirst`]: FIFO frontier, level-by-level outward.
//! - [`Algorithm::DepthFirst`]: LIFO frontier.
//! - [`Algorithm::DepthFirstRecursive`]: call-stack frontier with a
//!   configurable depth ceiling.
//!
//! All three admit a cell exactly once (on-grid, at or below the water
//! level, not yet flooded) and mark it flooded at admission time, so the
//! final classification is identical regardless of visit order.
//!
//! Rendering and pacing attach through [`FloodObserver`]; the engine
//! itself never sleeps or prints.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod state;
mod traversal;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use cancel::CancelToken;
pub use config::{ConfigError, EngineConfig};
pub use engine::{FloodEngine, RunPhase};
pub use error::FloodError;
pub use metrics::RunMetrics;
pub use observer::{FloodObserver, FnObserver, NoopObserver, RecordingObserver};
pub use state::FloodState;

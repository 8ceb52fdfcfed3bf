//! Deluge: flood propagation over rectangular elevation grids.
//!
//! This is the facade crate that re-exports the public API from all Deluge
//! sub-crates. Water enters at source cells and spreads to 4-adjacent
//! cells whose elevation is at or below the water level.
//!
//! # Quick start
//!
//! ```rust
//! use deluge::prelude::*;
//!
//! let terrain = Terrain::new(
//!     vec![
//!         vec![5.0, 5.0, 5.0],
//!         vec![5.0, 0.0, 5.0],
//!         vec![5.0, 5.0, 5.0],
//!     ],
//!     vec![GridPoint::new(1, 1)],
//!     0.0,
//! )
//! .unwrap();
//!
//! let mut engine = FloodEngine::new(&terrain);
//! let metrics = engine.run(Algorithm::BreadthFirst).unwrap();
//! assert_eq!(metrics.admitted, 1);
//! assert_eq!(engine.is_flooded(GridPoint::new(1, 1)), Ok(true));
//! assert_eq!(engine.is_flooded(GridPoint::new(0, 0)), Ok(false));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `deluge-core` | `GridPoint`, `TerrainError` |
//! | [`terrain`] | `deluge-terrain` | `Terrain`, map-file loader |
//! | [`engine`] | `deluge-engine` | `FloodEngine`, traversals, observers, metrics |
//! | [`render`] | `deluge-render` | Frame rendering and animation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid coordinates and core errors (`deluge-core`).
pub use deluge_core as types;

/// Terrain model and map loading (`deluge-terrain`).
///
/// Build a [`terrain::Terrain`] directly or read one from a map file with
/// [`terrain::load_map`].
pub use deluge_terrain as terrain;

/// Flood engine (`deluge-engine`).
///
/// [`engine::FloodEngine`] runs any [`engine::Algorithm`] and reports
/// [`engine::RunMetrics`].
pub use deluge_engine as engine;

/// Console rendering (`deluge-render`).
pub use deluge_render as render;

/// Common imports for typical Deluge usage.
///
/// ```rust
/// use deluge::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use deluge_core::{GridPoint, TerrainError};

    // Terrain
    pub use deluge_terrain::{load_map, parse_map, LoadError, Terrain};

    // Engine
    pub use deluge_engine::{
        Algorithm, CancelToken, EngineConfig, FloodEngine, FloodError, FloodObserver, FloodState,
        FnObserver, RunMetrics, RunPhase,
    };

    // Render
    pub use deluge_render::{render_frame, AnimatedRenderer, RenderStyle};
}

//! Elevation terrain for the Deluge flood model.
//!
//! [`Terrain`] is the immutable elevation surface plus water level and
//! source list that every flood run consumes. The [`loader`] module
//! reads terrains from the whitespace-separated map-file format.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod loader;
pub mod terrain;

pub use loader::{load_map, parse_map, LoadError};
pub use terrain::Terrain;

//! Core types for the Deluge flood model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`GridPoint`] coordinate with its four-neighbour generators and
//! the [`TerrainError`] taxonomy shared by the terrain and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod point;

pub use error::TerrainError;
pub use point::GridPoint;

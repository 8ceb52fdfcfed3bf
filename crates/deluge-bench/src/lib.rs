//! Benchmark terrains for the Deluge flood engine.
//!
//! - [`reference_profile`]: 100x100 random terrain (10K cells)
//! - [`stress_profile`]: 316x316 random terrain (~100K cells)
//! - [`open_basin`]: flat grid flooded end to end from its centre
//! - [`corridor`]: single winding path, worst case for recursion depth

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use deluge_core::GridPoint;
use deluge_terrain::Terrain;
use deluge_test_utils::{fixtures, random_terrain};

/// 100x100 terrain with whole-number elevations in `0..=10`, 4 sources, water level 5.
pub fn reference_profile(seed: u64) -> Terrain {
    random_terrain(seed, 100, 100, 4, 10, 5.0)
}

/// 316x316 terrain, same distribution as [`reference_profile`].
pub fn stress_profile(seed: u64) -> Terrain {
    random_terrain(seed, 316, 316, 4, 10, 5.0)
}

/// All-zero `n x n` grid with one source in the middle. Every cell floods.
pub fn open_basin(n: usize) -> Terrain {
    let mid = (n / 2) as i32;
    fixtures::flat(n, n, vec![GridPoint::new(mid, mid)])
}

/// `n x n` serpentine corridor. The recursive traversal nests one level
/// per cell until it reaches its ceiling.
pub fn corridor(n: usize) -> Terrain {
    fixtures::serpentine(n)
}

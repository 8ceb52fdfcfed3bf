//! Test utilities for Deluge development.
//!
//! Provides the standard scenario terrains ([`fixtures`]), seeded random
//! terrains, and [`reference_flood`], a deliberately naive fixpoint
//! computation of the flood set that the real traversals are checked
//! against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use deluge_core::GridPoint;
use deluge_terrain::Terrain;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Flooded flags (row-major) computed by repeated relaxation.
///
/// Starts from the eligible sources and sweeps the whole grid, flooding
/// any eligible cell with a flooded on-grid neighbour, until a sweep
/// changes nothing. Quadratic, obviously correct, and independent of any
/// frontier discipline.
pub fn reference_flood(terrain: &Terrain) -> Vec<bool> {
    let mut flooded = vec![false; terrain.cell_count()];
    for &s in terrain.sources() {
        if let Some(i) = terrain.index_of(s) {
            if terrain.is_eligible_index(i) {
                flooded[i] = true;
            }
        }
    }
    loop {
        let mut changed = false;
        for p in terrain.points() {
            let Some(i) = terrain.index_of(p) else {
                continue;
            };
            if flooded[i] || !terrain.is_eligible_index(i) {
                continue;
            }
            let wet_neighbour = terrain
                .on_grid_neighbours(p)
                .into_iter()
                .filter_map(|n| terrain.index_of(n))
                .any(|j| flooded[j]);
            if wet_neighbour {
                flooded[i] = true;
                changed = true;
            }
        }
        if !changed {
            return flooded;
        }
    }
}

/// Points flooded according to [`reference_flood`], row-major.
pub fn reference_points(terrain: &Terrain) -> Vec<GridPoint> {
    terrain
        .points()
        .zip(reference_flood(terrain))
        .filter_map(|(p, f)| f.then_some(p))
        .collect()
}

/// A seeded random terrain.
///
/// Elevations are whole numbers in `0..=max_elevation` so ties with the
/// water level are common. Sources are drawn from one cell beyond each
/// edge as well, so some fall off the grid.
pub fn random_terrain(
    seed: u64,
    rows: usize,
    cols: usize,
    n_sources: usize,
    max_elevation: u32,
    water_level: f64,
) -> Terrain {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data: Vec<f64> = (0..rows * cols)
        .map(|_| rng.gen_range(0..=max_elevation) as f64)
        .collect();
    let sources: Vec<GridPoint> = (0..n_sources.max(1))
        .map(|_| {
            GridPoint::new(
                rng.gen_range(-1..=rows as i32),
                rng.gen_range(-1..=cols as i32),
            )
        })
        .collect();
    Terrain::from_flat(rows, cols, data, sources, water_level)
        .expect("random_terrain dimensions must be non-zero")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_floods_pit_floor_only() {
        let t = fixtures::pit();
        assert_eq!(reference_points(&t), vec![GridPoint::new(1, 1)]);
    }

    #[test]
    fn reference_follows_winding_path() {
        let t = fixtures::serpentine(5);
        let flooded = reference_flood(&t);
        let eligible: Vec<bool> = t.points().map(|p| t.is_eligible(p)).collect();
        assert_eq!(flooded, eligible);
    }

    #[test]
    fn random_terrain_is_deterministic() {
        let a = random_terrain(7, 6, 9, 3, 5, 2.0);
        let b = random_terrain(7, 6, 9, 3, 5, 2.0);
        assert_eq!(a.sources(), b.sources());
        assert_eq!(a.to_string(), b.to_string());
        assert_eq!((a.rows(), a.cols()), (6, 9));
    }
}

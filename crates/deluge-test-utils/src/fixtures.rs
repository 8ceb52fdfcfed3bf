//! Standard scenario terrains.
//!
//! - [`pit`]: 3x3, a single low cell ringed by high ground.
//! - [`valley`]: 1x5 V-shaped profile, water rises partway up.
//! - [`flat`]: all-zero grid at water level zero.
//! - [`serpentine`]: one winding corridor covering half the grid.
//! - [`two_basins`]: two low regions split by a ridge.

use deluge_core::GridPoint;
use deluge_terrain::Terrain;

fn p(r: i32, c: i32) -> GridPoint {
    GridPoint::new(r, c)
}

/// `[[5,5,5],[5,0,5],[5,5,5]]`, source `(1,1)`, level 0.
pub fn pit() -> Terrain {
    Terrain::new(
        vec![
            vec![5.0, 5.0, 5.0],
            vec![5.0, 0.0, 5.0],
            vec![5.0, 5.0, 5.0],
        ],
        vec![p(1, 1)],
        0.0,
    )
    .expect("pit fixture")
}

/// `[3,2,1,2,3]`, source `(0,2)`, level 2.
pub fn valley() -> Terrain {
    Terrain::new(vec![vec![3.0, 2.0, 1.0, 2.0, 3.0]], vec![p(0, 2)], 2.0).expect("valley fixture")
}

/// All-zero `rows x cols` grid at level 0.
pub fn flat(rows: usize, cols: usize, sources: Vec<GridPoint>) -> Terrain {
    Terrain::from_flat(rows, cols, vec![0.0; rows * cols], sources, 0.0).expect("flat fixture")
}

/// `n x n` grid where even rows are open (0) and odd rows are walls (9)
/// with a single gap alternating between the last and first column.
/// Source `(0,0)`, level 0. Every open cell lies on one path.
pub fn serpentine(n: usize) -> Terrain {
    let mut grid = vec![vec![0.0; n]; n];
    for (r, row) in grid.iter_mut().enumerate() {
        if r % 2 == 1 {
            row.fill(9.0);
            let gap = if (r / 2) % 2 == 0 { n - 1 } else { 0 };
            row[gap] = 0.0;
        }
    }
    Terrain::new(grid, vec![p(0, 0)], 0.0).expect("serpentine fixture")
}

/// Two 3x3 basins at elevation 1 separated by a ridge column at 8.
/// One source in the left basin only; level 4.
pub fn two_basins() -> Terrain {
    let row = vec![1.0, 1.0, 1.0, 8.0, 1.0, 1.0, 1.0];
    Terrain::new(vec![row.clone(), row.clone(), row], vec![p(1, 1)], 4.0)
        .expect("two_basins fixture")
}
